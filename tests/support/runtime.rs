//! Tokio runtime and mock GitLab server shared between BDD steps.
//!
//! Steps are synchronous, so each scenario owns a runtime and drives async
//! work through [`StepRuntime::block_on`].

use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::{Builder, Runtime};
use wiremock::MockServer;

/// Runtime handle that can be cloned into an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct StepRuntime(Rc<Runtime>);

impl StepRuntime {
    /// Starts a small multi-threaded runtime so the mock server keeps serving
    /// while a step blocks on the client.
    pub fn start() -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        Ok(Self(Rc::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.block_on(future)
    }
}

/// Returns the scenario runtime, starting it and the mock server on first
/// use.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be built.
pub fn runtime_with_server(
    runtime: &Slot<StepRuntime>,
    server: &Slot<MockServer>,
) -> io::Result<StepRuntime> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(StepRuntime::start()?);
    }
    let step_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("scenario runtime missing"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(step_runtime.block_on(MockServer::start()));
    }

    Ok(step_runtime)
}
