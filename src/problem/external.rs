//! Evaluation delegated to an external process.
//!
//! The engine and the evaluator talk over the child's standard streams:
//!
//! - **Request** (engine → stdin): `v1 v2 ... vn\n`
//! - **Response** (stdout → engine): `o1 ... ok c1 ... cm\n`
//!
//! Exactly one response line is read per request. The evaluator must not
//! write anything else to stdout and must exit once its stdin reaches
//! end-of-stream. Its stderr is drained on a background thread and copied
//! to this process's stderr, so a chatty evaluator never blocks on a full
//! pipe.

use super::codec::{decode_response, encode_request};
use super::types::{Problem, ProblemSpec};
use crate::error::{MoeaError, ProtocolError, ProtocolErrorKind, Result};
use crate::solution::{Domain, Solution};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::process::{Child, ChildStderr, Command, Stdio};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

/// A [`Problem`] whose evaluations are computed by another program.
///
/// Requests are serialized: at most one exchange is in flight, even when
/// the engine evaluates offspring in parallel.
///
/// # Usage
///
/// ```no_run
/// use std::process::Command;
/// use u_moea::problem::{ExternalProblem, ProblemSpec};
///
/// let spec = ProblemSpec::real(10, 0.0, 1.0, 2, 0);
/// let problem = ExternalProblem::spawn(Command::new("./dtlz2"), spec)?;
/// # Ok::<(), u_moea::error::MoeaError>(())
/// ```
pub struct ExternalProblem {
    spec: ProblemSpec,
    connection: Mutex<Option<Connection>>,
}

/// The open channel: both protocol streams plus the process and its
/// stderr drain, if any.
struct Connection {
    reader: Box<dyn BufRead + Send>,
    writer: Box<dyn Write + Send>,
    child: Option<Child>,
    drain: Option<JoinHandle<()>>,
}

impl ExternalProblem {
    /// Starts `command` and connects to its standard streams.
    ///
    /// The command's stdin, stdout and stderr are replaced by pipes.
    ///
    /// # Errors
    ///
    /// - [`MoeaError::Config`] if `spec` is invalid or declares a non-real
    ///   variable.
    /// - [`MoeaError::Spawn`] if the process cannot be started.
    pub fn spawn(mut command: Command, spec: ProblemSpec) -> Result<Self> {
        check_spec(&spec)?;

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(MoeaError::Spawn)?;

        let streams = (child.stdin.take(), child.stdout.take(), child.stderr.take());
        let (Some(stdin), Some(stdout), Some(stderr)) = streams else {
            let _ = child.kill();
            let _ = child.wait();
            return Err(MoeaError::Spawn(io::Error::other(
                "evaluator process streams are not available",
            )));
        };

        let drain = match spawn_drain(stderr) {
            Ok(handle) => handle,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(MoeaError::Spawn(e));
            }
        };

        log::debug!(
            "started external evaluator (pid {}) for {} variables, {} objectives, {} constraints",
            child.id(),
            spec.domains.len(),
            spec.num_objectives,
            spec.num_constraints
        );

        Ok(Self {
            spec,
            connection: Mutex::new(Some(Connection {
                reader: Box::new(BufReader::new(stdout)),
                writer: Box::new(BufWriter::new(stdin)),
                child: Some(child),
                drain: Some(drain),
            })),
        })
    }

    /// Connects to an evaluator through arbitrary streams.
    ///
    /// `reader` supplies responses and `writer` receives requests. No
    /// process is owned, so [`close`](Problem::close) only drops the streams.
    pub fn from_streams<R, W>(reader: R, writer: W, spec: ProblemSpec) -> Result<Self>
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        check_spec(&spec)?;
        Ok(Self {
            spec,
            connection: Mutex::new(Some(Connection {
                reader: Box::new(BufReader::new(reader)),
                writer: Box::new(writer),
                child: None,
                drain: None,
            })),
        })
    }

    /// The problem shape this evaluator was declared with.
    pub fn spec(&self) -> &ProblemSpec {
        &self.spec
    }

    /// Whether [`close`](Problem::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Connection>> {
        self.connection.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_shape(&self, solution: &Solution) -> Result<()> {
        if solution.num_variables() != self.spec.domains.len()
            || solution.num_objectives() != self.spec.num_objectives
            || solution.num_constraints() != self.spec.num_constraints
        {
            return Err(MoeaError::config(format!(
                "solution shape ({} variables, {} objectives, {} constraints) does not match \
                 evaluator ({} variables, {} objectives, {} constraints)",
                solution.num_variables(),
                solution.num_objectives(),
                solution.num_constraints(),
                self.spec.domains.len(),
                self.spec.num_objectives,
                self.spec.num_constraints
            )));
        }
        Ok(())
    }
}

impl Problem for ExternalProblem {
    fn name(&self) -> &str {
        "external"
    }

    fn domains(&self) -> &[Domain] {
        &self.spec.domains
    }

    fn num_objectives(&self) -> usize {
        self.spec.num_objectives
    }

    fn num_constraints(&self) -> usize {
        self.spec.num_constraints
    }

    fn evaluate(&self, solution: &mut Solution) -> Result<()> {
        let mut guard = self.lock();
        let connection = guard.as_mut().ok_or(MoeaError::ChannelClosed)?;

        self.check_shape(solution)?;
        let request = encode_request(solution)?;

        let response = match connection.exchange(&request) {
            Ok(line) => line,
            Err(kind) => {
                return Err(ProtocolError {
                    request,
                    response: None,
                    kind,
                }
                .into())
            }
        };

        match decode_response(&response, self.spec.num_objectives, self.spec.num_constraints) {
            Ok((objectives, constraints)) => solution.set_evaluation(&objectives, &constraints),
            Err(kind) => Err(ProtocolError {
                request,
                response: Some(response),
                kind,
            }
            .into()),
        }
    }

    /// Closes both streams and reaps the process.
    ///
    /// Safe to call more than once and after the process has exited.
    fn close(&self) -> Result<()> {
        let connection = self.lock().take();
        match connection {
            Some(connection) => connection.shutdown(),
            None => Ok(()),
        }
    }
}

impl Drop for ExternalProblem {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::warn!("failed to close external evaluator: {e}");
        }
    }
}

impl Connection {
    /// Sends one request line and reads one response line.
    fn exchange(&mut self, request: &str) -> std::result::Result<String, ProtocolErrorKind> {
        self.writer.write_all(request.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ProtocolErrorKind::EndOfStream);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn shutdown(self) -> Result<()> {
        let Connection {
            reader,
            mut writer,
            child,
            drain,
        } = self;

        let mut first_error = None;

        // A process that already exited leaves a broken pipe behind.
        if let Err(e) = writer.flush() {
            if e.kind() != io::ErrorKind::BrokenPipe {
                first_error = Some(e);
            }
        }
        drop(writer);
        drop(reader);

        if let Some(mut child) = child {
            match child.wait() {
                Ok(status) => log::debug!("external evaluator exited with {status}"),
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(handle) = drain {
            if handle.join().is_err() {
                log::warn!("stderr drain thread panicked");
            }
        }

        match first_error {
            Some(e) => Err(MoeaError::Io(e)),
            None => Ok(()),
        }
    }
}

fn check_spec(spec: &ProblemSpec) -> Result<()> {
    spec.validate()?;
    if let Some(i) = spec
        .domains
        .iter()
        .position(|d| !matches!(d, Domain::Real { .. }))
    {
        return Err(MoeaError::config(format!(
            "variable {i} is not real; external evaluators only accept real variables"
        )));
    }
    Ok(())
}

/// Copies the child's stderr to ours until the child closes it.
fn spawn_drain(mut stderr: ChildStderr) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("moea-evaluator-stderr".into())
        .spawn(move || {
            let mut sink = io::stderr();
            if let Err(e) = io::copy(&mut stderr, &mut sink) {
                log::debug!("stderr drain stopped: {e}");
            }
        })
}

// ============================================================================
// Tests
// ============================================================================
