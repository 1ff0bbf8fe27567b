//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info};

use crate::application::UserListController;
use crate::domain::entities::{UserDraft, UserId, UserRecord};
use crate::domain::errors::ApiError;
use crate::domain::ports::UserApiPort;
use crate::presentation::ui::manage_screen::{ManageScreen, ScreenAction};

const NOTIFICATION_TICK_RATE: Duration = Duration::from_millis(100);

/// Completion of a network call, delivered back to the event loop.
///
/// Requests are fire-and-forget: nothing stops two from being in flight
/// at once, and whichever completion arrives last wins.
#[derive(Debug)]
enum Action {
    UsersLoaded(Vec<UserRecord>),
    FetchFailed(ApiError),
    UserCreated {
        record: UserRecord,
        birth_date: String,
    },
    UserUpdated {
        record: UserRecord,
        birth_date: String,
    },
    SaveFailed(ApiError),
    UserDeleted(UserId),
    DeleteFailed {
        id: UserId,
        error: ApiError,
    },
}

/// Wires the controller, the screen, and the remote API together.
pub struct App {
    controller: UserListController,
    screen: ManageScreen,
    api: Arc<dyn UserApiPort>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    running: bool,
}

impl App {
    /// Creates the application against the given API port.
    #[must_use]
    pub fn new(api: Arc<dyn UserApiPort>, notification_lifetime: Duration) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            controller: UserListController::new(notification_lifetime),
            screen: ManageScreen::new(),
            api,
            action_tx,
            action_rx,
            running: true,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.spawn_fetch();

        let mut terminal_events = EventStream::new();
        let mut tick = interval(NOTIFICATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }

                Some(Ok(event)) = terminal_events.next() => {
                    self.handle_terminal_event(&event);
                }

                _ = tick.tick() => {
                    self.controller.tick();
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        self.screen.render(
            frame,
            self.controller.users(),
            self.controller.notification(),
        );
    }

    fn handle_terminal_event(&mut self, event: &Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                self.handle_key(*key);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let has_notification = self.controller.notification().is_some();

        match self
            .screen
            .handle_key(key, self.controller.users(), has_notification)
        {
            ScreenAction::Quit => self.running = false,
            ScreenAction::Submit(draft) => self.handle_submit(draft),
            ScreenAction::EditUser(id) => {
                if let Some(draft) = self.controller.begin_edit(id) {
                    self.screen.start_edit(&draft);
                }
            }
            ScreenAction::DeleteUser(id) => self.spawn_delete(id),
            ScreenAction::CancelEdit => {
                self.controller.cancel_edit();
                self.screen.reset_form();
            }
            ScreenAction::DismissNotification => self.controller.dismiss_notification(),
            ScreenAction::None => {}
        }
    }

    fn handle_submit(&mut self, draft: UserDraft) {
        if let Err(error) = draft.validate() {
            debug!(error = %error, "Draft rejected before submit");
            self.controller.reject_draft(&error);
            return;
        }

        match self.controller.editing_id() {
            Some(id) => self.spawn_update(id, draft),
            None => self.spawn_create(draft),
        }
    }

    fn spawn_fetch(&self) {
        let api = self.api.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let action = match api.list_users().await {
                Ok(users) => Action::UsersLoaded(users),
                Err(error) => Action::FetchFailed(error),
            };
            let _ = tx.send(action);
        });
    }

    fn spawn_create(&self, draft: UserDraft) {
        let api = self.api.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let action = match api.create_user(&draft).await {
                Ok(record) => Action::UserCreated {
                    record,
                    birth_date: draft.date_of_birth,
                },
                Err(error) => Action::SaveFailed(error),
            };
            let _ = tx.send(action);
        });
    }

    fn spawn_update(&self, id: UserId, draft: UserDraft) {
        let api = self.api.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let action = match api.update_user(id, &draft).await {
                Ok(record) => Action::UserUpdated {
                    record,
                    birth_date: draft.date_of_birth,
                },
                Err(error) => Action::SaveFailed(error),
            };
            let _ = tx.send(action);
        });
    }

    fn spawn_delete(&self, id: UserId) {
        let api = self.api.clone();
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let action = match api.delete_user(id).await {
                Ok(()) => Action::UserDeleted(id),
                Err(error) => Action::DeleteFailed { id, error },
            };
            let _ = tx.send(action);
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::UsersLoaded(users) => self.controller.apply_fetched(users),
            Action::FetchFailed(error) => self.controller.apply_fetch_failed(&error),
            Action::UserCreated { record, birth_date } => {
                self.controller.apply_created(record, &birth_date);
                self.screen.reset_form();
            }
            Action::UserUpdated { record, birth_date } => {
                self.controller.apply_updated(record, &birth_date);
                self.screen.reset_form();
            }
            Action::SaveFailed(error) => self.controller.apply_save_failed(&error),
            Action::UserDeleted(id) => self.controller.apply_deleted(id),
            Action::DeleteFailed { id, error } => {
                self.controller.apply_delete_failed(id, &error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationLevel;
    use crate::domain::ports::user_api_port::mock::MockUserApi;

    fn seeded_api() -> Arc<MockUserApi> {
        Arc::new(MockUserApi::new(true).with_users(vec![
            UserRecord::new(3, "user3", "u3@example.com", ""),
            UserRecord::new(5, "user5", "u5@example.com", ""),
        ]))
    }

    async fn drain_action(app: &mut App) {
        let action = app.action_rx.recv().await.expect("expected an action");
        app.handle_action(action);
    }

    #[tokio::test]
    async fn test_initial_fetch_populates_list() {
        let mut app = App::new(seeded_api(), Duration::from_secs(1));

        app.spawn_fetch();
        drain_action(&mut app).await;

        assert_eq!(app.controller.users().len(), 2);
        assert_eq!(app.controller.users()[0].date_of_birth(), "2001-01-01");
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces_error_notification() {
        let mut app = App::new(Arc::new(MockUserApi::new(false)), Duration::from_secs(1));

        app.spawn_fetch();
        drain_action(&mut app).await;

        assert!(app.controller.users().is_empty());
        assert_eq!(
            app.controller.notification().unwrap().level,
            NotificationLevel::Error
        );
    }

    #[tokio::test]
    async fn test_create_flow_appends_and_resets_form() {
        let mut app = App::new(seeded_api(), Duration::from_secs(1));
        app.spawn_fetch();
        drain_action(&mut app).await;

        app.handle_submit(UserDraft::new("Ada", "ada@example.com", "1990-12-10"));
        drain_action(&mut app).await;

        assert_eq!(app.controller.users().len(), 3);
        let added = &app.controller.users()[2];
        assert_eq!(added.id(), UserId(11));
        assert_eq!(added.date_of_birth(), "1990-12-10");
    }

    #[tokio::test]
    async fn test_invalid_draft_makes_no_request() {
        let mut app = App::new(seeded_api(), Duration::from_secs(1));

        app.handle_submit(UserDraft::new("", "", ""));

        assert!(app.action_rx.try_recv().is_err());
        assert_eq!(
            app.controller.notification().unwrap().level,
            NotificationLevel::Error
        );
    }

    #[tokio::test]
    async fn test_edit_then_submit_updates_record() {
        let mut app = App::new(seeded_api(), Duration::from_secs(1));
        app.spawn_fetch();
        drain_action(&mut app).await;

        let draft = app.controller.begin_edit(UserId(5)).unwrap();
        app.screen.start_edit(&draft);

        app.handle_submit(UserDraft::new("Renamed", "new@example.com", "1985-06-01"));
        drain_action(&mut app).await;

        let users = app.controller.users();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].name(), "Renamed");
        assert_eq!(users[1].date_of_birth(), "1985-06-01");
        assert!(!app.controller.is_editing());
    }

    #[tokio::test]
    async fn test_delete_flow_removes_record() {
        let api = seeded_api();
        let mut app = App::new(api.clone(), Duration::from_secs(1));
        app.spawn_fetch();
        drain_action(&mut app).await;

        app.spawn_delete(UserId(5));
        drain_action(&mut app).await;

        let ids: Vec<u64> = app
            .controller
            .users()
            .iter()
            .map(|u| u.id().as_u64())
            .collect();
        assert_eq!(ids, vec![3]);
        assert_eq!(*api.deleted.lock().unwrap(), vec![UserId(5)]);
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_list_unchanged() {
        let api = seeded_api();
        let mut app = App::new(api.clone(), Duration::from_secs(1));
        app.spawn_fetch();
        drain_action(&mut app).await;

        api.set_should_succeed(false);
        app.spawn_delete(UserId(5));
        drain_action(&mut app).await;

        assert_eq!(app.controller.users().len(), 2);
        assert_eq!(
            app.controller.notification().unwrap().message,
            "Failed to delete user. Please try again."
        );
    }
}
