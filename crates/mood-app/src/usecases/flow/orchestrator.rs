//! Flow orchestrator.
//!
//! This module turns user actions into validated screen transitions and
//! session state changes. Every handler runs to completion synchronously;
//! a rejected action displays its message at the matching error slot and
//! leaves the current screen unchanged.

use std::sync::Arc;

use mood_core::error::EmailContext;
use mood_core::ports::{FormPort, MessagePort, UserRepositoryPort};
use mood_core::validation::{validate_email, validate_password};
use mood_core::{
    Account, ErrorSlot, FlowConfig, FlowError, FormId, MoodEntry, MoodTag, Password,
    ReminderTime, ScreenId, SessionId, SplashEvent, SplashState, TimerId,
};
use tracing::{debug, error, info, info_span};

use crate::deps::FlowDeps;
use crate::usecases::flow::forms::{CreateAccountForm, LoginForm};
use crate::usecases::{ScreenController, SplashSequencer, WizardState};

/// Session-scoped driver of the onboarding flow.
pub struct FlowOrchestrator {
    session_id: SessionId,
    screens: ScreenController,
    splash: SplashSequencer,
    wizard: WizardState,
    signed_in: Option<String>,

    users: Arc<dyn UserRepositoryPort>,
    messages: Arc<dyn MessagePort>,
    forms: Arc<dyn FormPort>,
}

impl FlowOrchestrator {
    pub fn new(deps: FlowDeps, config: &FlowConfig) -> Self {
        Self {
            session_id: SessionId::new(),
            screens: ScreenController::new(deps.screens),
            splash: SplashSequencer::new(deps.timer, config),
            wizard: WizardState::new(),
            signed_in: None,
            users: deps.users,
            messages: deps.messages,
            forms: deps.forms,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn current_screen(&self) -> Option<ScreenId> {
        self.screens.current()
    }

    pub fn splash_state(&self) -> SplashState {
        self.splash.state()
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    /// Email of the account that last signed up or logged in.
    pub fn signed_in_email(&self) -> Option<&str> {
        self.signed_in.as_deref()
    }

    // =========================
    // Splash
    // =========================

    /// Show the splash screen and arm its display timer.
    pub fn start(&mut self) -> Result<(), FlowError> {
        let _span = info_span!("usecase.flow.start", session_id = %self.session_id).entered();
        self.splash.dispatch(SplashEvent::Start, &mut self.screens)?;
        Ok(())
    }

    /// Any key press while the splash is current skips its remaining wait.
    pub fn key_pressed(&mut self) -> Result<(), FlowError> {
        if !self.screens.is_current(ScreenId::Splash) {
            return Ok(());
        }
        let _span =
            info_span!("usecase.flow.key_pressed", session_id = %self.session_id).entered();
        self.splash
            .dispatch(SplashEvent::KeyPressed, &mut self.screens)?;
        Ok(())
    }

    pub fn timer_fired(&mut self, timer: TimerId) -> Result<(), FlowError> {
        let _span =
            info_span!("usecase.flow.timer_fired", session_id = %self.session_id, ?timer)
                .entered();
        self.splash
            .dispatch(SplashEvent::from_timer(timer), &mut self.screens)?;
        Ok(())
    }

    // =========================
    // Main page navigation
    // =========================

    pub fn open_create_account(&mut self) -> ScreenId {
        let _span =
            info_span!("usecase.flow.open_create_account", session_id = %self.session_id)
                .entered();
        self.messages.clear_error(ErrorSlot::CreateAccount);
        self.show(ScreenId::CreateAccount)
    }

    pub fn open_login_form(&mut self) -> ScreenId {
        let _span =
            info_span!("usecase.flow.open_login_form", session_id = %self.session_id).entered();
        self.messages.clear_error(ErrorSlot::Login);
        self.show(ScreenId::LoginForm)
    }

    pub fn back_to_main(&mut self) -> ScreenId {
        let _span =
            info_span!("usecase.flow.back_to_main", session_id = %self.session_id).entered();
        self.show(ScreenId::Login)
    }

    // =========================
    // Accounts
    // =========================

    pub fn submit_create_account(
        &mut self,
        form: CreateAccountForm,
    ) -> Result<ScreenId, FlowError> {
        let _span = info_span!(
            "usecase.flow.submit_create_account",
            session_id = %self.session_id
        )
        .entered();
        self.require_screen(ScreenId::CreateAccount)?;
        let slot = ErrorSlot::CreateAccount;
        self.messages.clear_error(slot);

        let form = form.normalized();
        self.validate_new_account(&form)
            .map_err(|err| self.reject(slot, err))?;

        let account = Account::new(
            form.first_name,
            form.last_name,
            form.email,
            Password::new(form.password),
        );
        let welcome = format!(
            "Account created successfully! Welcome {}!",
            account.full_name()
        );
        let email = account.email().to_string();
        self.users
            .save(account)
            .map_err(|err| self.reject(slot, err.into()))?;
        info!(email = %email, "account created");

        self.forms.reset_form(FormId::CreateAccount);
        self.messages.announce(&welcome);
        self.signed_in = Some(email);
        Ok(self.enter_wizard())
    }

    pub fn submit_login(&mut self, form: LoginForm) -> Result<ScreenId, FlowError> {
        let _span =
            info_span!("usecase.flow.submit_login", session_id = %self.session_id).entered();
        self.require_screen(ScreenId::LoginForm)?;
        let slot = ErrorSlot::Login;
        self.messages.clear_error(slot);

        let form = form.normalized();
        if form.email.is_empty() || form.password.is_empty() {
            return Err(self.reject(slot, FlowError::MissingField));
        }
        if !validate_email(&form.email) {
            return Err(self.reject(
                slot,
                FlowError::MalformedEmail {
                    context: EmailContext::Login,
                },
            ));
        }

        let account = self
            .users
            .find_by_credentials(&form.email, &form.password)
            .map_err(|err| self.reject(slot, err.into()))?
            .ok_or(FlowError::InvalidCredentials)
            .map_err(|err| self.reject(slot, err))?;
        info!(email = %account.email(), "login succeeded");

        self.forms.reset_form(FormId::Login);
        self.messages
            .announce(&format!("Welcome back, {}!", account.first_name()));
        self.signed_in = Some(account.email().to_string());
        Ok(self.enter_wizard())
    }

    // Checks run in the order the form reports them; the first failure wins.
    fn validate_new_account(&self, form: &CreateAccountForm) -> Result<(), FlowError> {
        if form.has_empty_field() {
            return Err(FlowError::MissingField);
        }
        if !validate_email(&form.email) {
            return Err(FlowError::MalformedEmail {
                context: EmailContext::CreateAccount,
            });
        }
        if self.users.exists_by_email(&form.email)? {
            return Err(FlowError::DuplicateEmail);
        }
        let check = validate_password(&form.password);
        if !check.is_valid() {
            return Err(FlowError::WeakPassword(check));
        }
        if form.password != form.confirm_password {
            return Err(FlowError::PasswordMismatch);
        }
        Ok(())
    }

    // =========================
    // Wizard: mood and note
    // =========================

    pub fn select_mood_tag(&mut self, tag: MoodTag) -> Result<(), FlowError> {
        let _span =
            info_span!("usecase.flow.select_mood_tag", session_id = %self.session_id).entered();
        self.require_screen(ScreenId::MoodSelection)?;
        self.wizard.select_tag(tag);
        self.forms.highlight_mood_tag(Some(tag));
        self.forms.reset_form(FormId::MoodText);
        debug!(%tag, "mood tag selected");
        Ok(())
    }

    pub fn enter_free_text_mood(&mut self, text: &str) -> Result<(), FlowError> {
        let _span = info_span!(
            "usecase.flow.enter_free_text_mood",
            session_id = %self.session_id
        )
        .entered();
        self.require_screen(ScreenId::MoodSelection)?;
        self.forms.highlight_mood_tag(None);
        let has_mood = self.wizard.set_free_text(text);
        debug!(has_mood, "free-text mood entered");
        Ok(())
    }

    pub fn advance_from_mood(&mut self) -> Result<ScreenId, FlowError> {
        let _span =
            info_span!("usecase.flow.advance_from_mood", session_id = %self.session_id)
                .entered();
        self.require_screen(ScreenId::MoodSelection)?;
        let slot = ErrorSlot::Mood;
        self.messages.clear_error(slot);
        if self.wizard.mood().is_none() {
            return Err(self.reject(slot, FlowError::MissingMood));
        }
        Ok(self.show(ScreenId::NoteEntry))
    }

    pub fn advance_from_note(&mut self, note: &str) -> Result<ScreenId, FlowError> {
        let _span =
            info_span!("usecase.flow.advance_from_note", session_id = %self.session_id)
                .entered();
        self.require_screen(ScreenId::NoteEntry)?;
        let slot = ErrorSlot::Note;
        self.messages.clear_error(slot);
        let note = note.trim();
        if note.is_empty() {
            return Err(self.reject(slot, FlowError::MissingNote));
        }
        self.wizard.set_note(note);
        Ok(self.show(ScreenId::TimeSelection))
    }

    // =========================
    // Wizard: reminder time
    // =========================

    pub fn hour_up(&mut self) -> Result<ReminderTime, FlowError> {
        let _span = info_span!("usecase.flow.hour_up", session_id = %self.session_id).entered();
        self.adjust_reminder(ReminderTime::hour_up)
    }

    pub fn hour_down(&mut self) -> Result<ReminderTime, FlowError> {
        let _span =
            info_span!("usecase.flow.hour_down", session_id = %self.session_id).entered();
        self.adjust_reminder(ReminderTime::hour_down)
    }

    pub fn minute_up(&mut self) -> Result<ReminderTime, FlowError> {
        let _span =
            info_span!("usecase.flow.minute_up", session_id = %self.session_id).entered();
        self.adjust_reminder(ReminderTime::minute_up)
    }

    pub fn minute_down(&mut self) -> Result<ReminderTime, FlowError> {
        let _span =
            info_span!("usecase.flow.minute_down", session_id = %self.session_id).entered();
        self.adjust_reminder(ReminderTime::minute_down)
    }

    /// Last step of the flow. The entry is handed back and not stored.
    pub fn confirm_reminder_time(&self) -> Result<MoodEntry, FlowError> {
        let _span = info_span!(
            "usecase.flow.confirm_reminder_time",
            session_id = %self.session_id
        )
        .entered();
        self.require_screen(ScreenId::TimeSelection)?;
        let entry = self.wizard.entry().clone();
        info!(
            mood = ?entry.mood.as_ref().map(ToString::to_string),
            reminder = %entry.reminder_time,
            reminder_at = %entry.reminder_time.to_naive_time(),
            account = ?self.signed_in,
            "mood entry completed"
        );
        Ok(entry)
    }

    fn adjust_reminder(
        &mut self,
        adjust: fn(&mut ReminderTime),
    ) -> Result<ReminderTime, FlowError> {
        self.require_screen(ScreenId::TimeSelection)?;
        adjust(self.wizard.reminder_time_mut());
        let time = self.wizard.reminder_time();
        debug!(reminder = %time, "reminder time adjusted");
        Ok(time)
    }

    // =========================
    // Helpers
    // =========================

    /// Actions belong to one screen; on any other screen they do nothing.
    fn require_screen(&self, expected: ScreenId) -> Result<(), FlowError> {
        if self.screens.is_current(expected) {
            return Ok(());
        }
        let current = self.screens.current();
        debug!(%expected, ?current, "action ignored on inactive screen");
        Err(FlowError::ScreenNotActive { expected, current })
    }

    fn enter_wizard(&mut self) -> ScreenId {
        self.wizard.reset();
        self.messages.clear_error(ErrorSlot::Mood);
        self.messages.clear_error(ErrorSlot::Note);
        self.forms.highlight_mood_tag(None);
        self.forms.reset_form(FormId::MoodText);
        self.show(ScreenId::MoodSelection)
    }

    fn show(&mut self, screen: ScreenId) -> ScreenId {
        self.screens.show(screen);
        screen
    }

    fn reject(&self, slot: ErrorSlot, err: FlowError) -> FlowError {
        if err.is_validation() {
            debug!(slot = slot.as_str(), error = %err, "input rejected");
        } else {
            error!(slot = slot.as_str(), error = %err, "flow action failed");
        }
        self.messages.set_error(slot, &err.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mood_core::ports::{ScreenPort, TimerError, TimerPort, UserRepositoryError};
    use std::time::Duration;

    mock! {
        pub Screens {}
        impl ScreenPort for Screens {
            fn set_visible(&self, screen: ScreenId, visible: bool);
            fn begin_exit_animation(&self, screen: ScreenId);
        }
    }

    mock! {
        pub Messages {}
        impl MessagePort for Messages {
            fn set_error(&self, slot: ErrorSlot, message: &str);
            fn clear_error(&self, slot: ErrorSlot);
            fn announce(&self, message: &str);
        }
    }

    mock! {
        pub Forms {}
        impl FormPort for Forms {
            fn reset_form(&self, form: FormId);
            fn highlight_mood_tag(&self, tag: Option<MoodTag>);
        }
    }

    mock! {
        pub Timer {}
        impl TimerPort for Timer {
            fn schedule(&self, timer: TimerId, delay: Duration) -> Result<(), TimerError>;
            fn cancel(&self, timer: TimerId);
        }
    }

    mock! {
        pub Users {}
        impl UserRepositoryPort for Users {
            fn save(&self, account: Account) -> Result<(), UserRepositoryError>;
            fn find_by_credentials(
                &self,
                email: &str,
                password: &str,
            ) -> Result<Option<Account>, UserRepositoryError>;
            fn exists_by_email(&self, email: &str) -> Result<bool, UserRepositoryError>;
            fn count(&self) -> Result<usize, UserRepositoryError>;
        }
    }

    fn quiet_screens() -> MockScreens {
        let mut screens = MockScreens::new();
        screens.expect_set_visible().return_const(());
        screens.expect_begin_exit_animation().return_const(());
        screens
    }

    fn quiet_forms() -> MockForms {
        let mut forms = MockForms::new();
        forms.expect_reset_form().return_const(());
        forms.expect_highlight_mood_tag().return_const(());
        forms
    }

    fn orchestrator(users: MockUsers, messages: MockMessages) -> FlowOrchestrator {
        let deps = FlowDeps {
            screens: Arc::new(quiet_screens()),
            messages: Arc::new(messages),
            forms: Arc::new(quiet_forms()),
            timer: Arc::new(MockTimer::new()),
            users: Arc::new(users),
        };
        FlowOrchestrator::new(deps, &FlowConfig::default())
    }

    fn valid_form() -> CreateAccountForm {
        CreateAccountForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1!".into(),
        }
    }

    #[test]
    fn duplicate_email_never_reaches_the_store() {
        let mut users = MockUsers::new();
        users
            .expect_exists_by_email()
            .withf(|email| email == "ada@example.com")
            .returning(|_| Ok(true));
        users.expect_save().never();

        let mut messages = MockMessages::new();
        messages.expect_clear_error().return_const(());
        messages
            .expect_set_error()
            .withf(|slot, message| {
                *slot == ErrorSlot::CreateAccount
                    && message == "An account with this email already exists."
            })
            .times(1)
            .return_const(());

        let mut flow = orchestrator(users, messages);
        flow.open_create_account();
        let result = flow.submit_create_account(valid_form());

        assert!(matches!(result, Err(FlowError::DuplicateEmail)));
        assert_eq!(flow.current_screen(), Some(ScreenId::CreateAccount));
    }

    #[test]
    fn store_failure_is_shown_and_not_treated_as_validation() {
        let mut users = MockUsers::new();
        users.expect_exists_by_email().returning(|_| Ok(false));
        users
            .expect_save()
            .returning(|_| Err(UserRepositoryError::Storage("poisoned".into())));

        let mut messages = MockMessages::new();
        messages.expect_clear_error().return_const(());
        messages
            .expect_set_error()
            .withf(|slot, message| {
                *slot == ErrorSlot::CreateAccount && message.contains("poisoned")
            })
            .times(1)
            .return_const(());
        messages.expect_announce().never();

        let mut flow = orchestrator(users, messages);
        flow.open_create_account();
        let err = flow.submit_create_account(valid_form()).unwrap_err();

        assert!(!err.is_validation());
        assert_eq!(flow.signed_in_email(), None);
    }

    #[test]
    fn successful_signup_announces_full_name() {
        let mut users = MockUsers::new();
        users.expect_exists_by_email().returning(|_| Ok(false));
        users
            .expect_save()
            .withf(|account| account.email() == "ada@example.com")
            .times(1)
            .returning(|_| Ok(()));

        let mut messages = MockMessages::new();
        messages.expect_clear_error().return_const(());
        messages.expect_set_error().never();
        messages
            .expect_announce()
            .withf(|message| message == "Account created successfully! Welcome Ada Lovelace!")
            .times(1)
            .return_const(());

        let mut flow = orchestrator(users, messages);
        flow.open_create_account();
        let screen = flow.submit_create_account(valid_form()).unwrap();

        assert_eq!(screen, ScreenId::MoodSelection);
        assert_eq!(flow.signed_in_email(), Some("ada@example.com"));
    }

    #[test]
    fn malformed_login_email_skips_credential_lookup() {
        let mut users = MockUsers::new();
        users.expect_find_by_credentials().never();

        let mut messages = MockMessages::new();
        messages.expect_clear_error().return_const(());
        messages
            .expect_set_error()
            .withf(|slot, message| {
                *slot == ErrorSlot::Login && message == "Please enter a valid email address."
            })
            .times(1)
            .return_const(());

        let mut flow = orchestrator(users, messages);
        flow.open_login_form();
        let result = flow.submit_login(LoginForm {
            email: "ada@example".into(),
            password: "Abcdef1!".into(),
        });

        assert!(matches!(result, Err(FlowError::MalformedEmail { .. })));
    }

    #[test]
    fn submit_on_inactive_screen_touches_nothing() {
        let mut users = MockUsers::new();
        users.expect_exists_by_email().never();
        users.expect_find_by_credentials().never();
        users.expect_save().never();

        let mut messages = MockMessages::new();
        messages.expect_clear_error().never();
        messages.expect_set_error().never();

        let mut flow = orchestrator(users, messages);
        let result = flow.submit_create_account(valid_form());
        assert!(matches!(
            result,
            Err(FlowError::ScreenNotActive {
                expected: ScreenId::CreateAccount,
                current: None,
            })
        ));

        let result = flow.submit_login(LoginForm {
            email: "ada@example.com".into(),
            password: "Abcdef1!".into(),
        });
        assert!(matches!(result, Err(FlowError::ScreenNotActive { .. })));
        assert_eq!(flow.signed_in_email(), None);
    }

    #[test]
    fn key_press_outside_splash_is_ignored() {
        let mut flow = orchestrator(MockUsers::new(), {
            let mut messages = MockMessages::new();
            messages.expect_clear_error().return_const(());
            messages
        });

        flow.open_login_form();
        // MockTimer has no expectations: any schedule/cancel would panic
        flow.key_pressed().unwrap();
        assert_eq!(flow.current_screen(), Some(ScreenId::LoginForm));
        assert_eq!(flow.splash_state(), SplashState::Idle);
    }
}
