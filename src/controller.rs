#![cfg(feature = "std")]

use tokio::sync::Mutex;

use crate::{
    client::{Action, CommandApi, CommandError},
    domain::{GridState, StateSnapshot},
    surface::RenderSurface,
    view::ViewSync,
};

/// Blocking, user-facing failure signal.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// [`Notifier`] for the terminal: prints to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("!! {}", message);
    }
}

/// Routes user actions through the client and paints successful results.
///
/// `dispatch` takes `&self` and nothing stops two actions from being in
/// flight at once. Responses are applied in the order they resolve, not the
/// order they were issued.
pub struct Controller<C: CommandApi, S: RenderSurface, N: Notifier> {
    client: C,
    view: Mutex<ViewSync<S>>,
    notifier: N,
}

impl<C: CommandApi, S: RenderSurface, N: Notifier> Controller<C, S, N> {
    pub fn new(client: C, view: ViewSync<S>, notifier: N) -> Self {
        Self {
            client,
            view: Mutex::new(view),
            notifier,
        }
    }

    /// Fetch the current server state, build the surface for its grid with
    /// `make_surface` and paint the robot before handing back a ready
    /// controller.
    pub async fn bootstrap(
        client: C,
        notifier: N,
        make_surface: impl FnOnce(&GridState) -> S,
    ) -> Result<Self, CommandError> {
        let snapshot = match client.fetch_state().await {
            Ok(s) => s,
            Err(e) => {
                log::error!("Initial state fetch failed: {}", e);
                notifier.notify("Error loading initial state");
                return Err(e);
            }
        };
        log::info!(
            "Initial state: ({}, {}) facing {}",
            snapshot.robot.position.x,
            snapshot.robot.position.y,
            snapshot.robot.heading
        );
        let view = ViewSync::with_initial(make_surface(&snapshot.grid), &snapshot.robot);
        Ok(Self::new(client, view, notifier))
    }

    /// Perform `action`. On failure the surface is left as it was and the
    /// user is notified; the controller stays usable either way.
    pub async fn dispatch(&self, action: Action) -> Result<StateSnapshot, CommandError> {
        match self.client.send_action(action).await {
            Ok(snapshot) => {
                let drawn = self.view.lock().await.apply(&snapshot.robot);
                log::info!(
                    "{:?} -> ({}, {}) facing {}",
                    action,
                    snapshot.robot.position.x,
                    snapshot.robot.position.y,
                    snapshot.robot.heading
                );
                if !drawn {
                    log::warn!(
                        "No cell for position ({}, {}); marker not drawn",
                        snapshot.robot.position.x,
                        snapshot.robot.position.y
                    );
                }
                Ok(snapshot)
            }
            Err(e) => {
                log::error!("{:?} failed: {}", action, e);
                self.notifier.notify(action.failure_message());
                Err(e)
            }
        }
    }

    /// Run `f` against the current surface.
    pub async fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let view = self.view.lock().await;
        f(view.surface())
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
