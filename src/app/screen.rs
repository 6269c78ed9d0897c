use crate::core::calculator::TipCalculator;
use crate::core::{BillInput, ConfigProvider, CurrencyFormatter, InvalidInputPolicy, TipPercentage};
use crate::utils::error::TipError;
use rust_decimal::Decimal;

/// Something the user did on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    CostEdited(String),
    PercentSelected(TipPercentage),
    RoundUpToggled(bool),
    CalculatePressed,
    /// Enter in the cost field.
    ConfirmKey,
}

/// Output of the screen for whoever hosts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    TipRendered { tip: Decimal, display: String },
    ValidationFailed { message: String, display: String },
    KeyboardDismissed,
}

pub fn tip_amount_text(formatted: &str) -> String {
    format!("Tip Amount: {}", formatted)
}

/// Form state of the tip screen plus the calculate-and-render pass.
pub struct TipScreen<F: CurrencyFormatter> {
    calculator: TipCalculator,
    formatter: F,
    policy: InvalidInputPolicy,
    cost_text: String,
    selection: TipPercentage,
    round_up: bool,
    display: String,
    last_error: Option<TipError>,
}

impl<F: CurrencyFormatter> TipScreen<F> {
    pub fn new(formatter: F, policy: InvalidInputPolicy) -> Self {
        Self {
            calculator: TipCalculator::new(),
            formatter,
            policy,
            cost_text: String::new(),
            selection: TipPercentage::default(),
            round_up: false,
            display: String::new(),
            last_error: None,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, formatter: F) -> Self {
        let mut screen = Self::new(formatter, config.invalid_input_policy());
        screen.selection = config.default_percentage();
        screen.round_up = config.default_round_up();
        screen
    }

    pub fn input(&self) -> BillInput {
        BillInput::new(self.cost_text.clone(), self.selection, self.round_up)
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn selection(&self) -> TipPercentage {
        self.selection
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    pub fn cost_text(&self) -> &str {
        &self.cost_text
    }

    /// The validation error behind the last `ValidationFailed`, if any.
    pub fn take_error(&mut self) -> Option<TipError> {
        self.last_error.take()
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Notification> {
        tracing::trace!(?event, "Handling UI event");
        match event {
            UiEvent::CostEdited(text) => {
                self.cost_text = text;
                Vec::new()
            }
            UiEvent::PercentSelected(percentage) => {
                self.selection = percentage;
                Vec::new()
            }
            UiEvent::RoundUpToggled(on) => {
                self.round_up = on;
                Vec::new()
            }
            UiEvent::CalculatePressed => vec![self.calculate_and_render()],
            UiEvent::ConfirmKey => vec![Notification::KeyboardDismissed, self.calculate_and_render()],
        }
    }

    fn calculate_and_render(&mut self) -> Notification {
        let input = self.input();
        match self.calculator.calculate_input(&input) {
            Ok(result) => {
                self.last_error = None;
                self.display = tip_amount_text(&self.formatter.format(result.tip_amount));
                tracing::debug!(
                    percentage = %input.percentage,
                    round_up = input.round_up,
                    "{}",
                    self.display
                );
                Notification::TipRendered {
                    tip: result.tip_amount,
                    display: self.display.clone(),
                }
            }
            Err(e) => self.render_invalid(e),
        }
    }

    fn render_invalid(&mut self, error: TipError) -> Notification {
        let message = error.user_friendly_message();
        tracing::warn!("{} ({})", error, error.recovery_suggestion());

        self.display = match self.policy {
            InvalidInputPolicy::Reject => message.clone(),
            InvalidInputPolicy::ResetToZero => {
                tip_amount_text(&self.formatter.format(Decimal::ZERO))
            }
        };

        self.last_error = Some(error);
        Notification::ValidationFailed {
            message,
            display: self.display.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainFormatter;

    impl CurrencyFormatter for PlainFormatter {
        fn format(&self, amount: Decimal) -> String {
            format!("{:.2}", amount)
        }
    }

    #[test]
    fn test_edits_do_not_render() {
        let mut screen = TipScreen::new(PlainFormatter, InvalidInputPolicy::Reject);
        assert!(screen.handle(UiEvent::CostEdited("12".to_string())).is_empty());
        assert!(screen.handle(UiEvent::PercentSelected(TipPercentage::Twenty)).is_empty());
        assert!(screen.handle(UiEvent::RoundUpToggled(true)).is_empty());
        assert_eq!(screen.display(), "");
        assert_eq!(screen.input(), BillInput::new("12", TipPercentage::Twenty, true));
    }

    #[test]
    fn test_calculate_renders_once() {
        let mut screen = TipScreen::new(PlainFormatter, InvalidInputPolicy::Reject);
        screen.handle(UiEvent::CostEdited("10".to_string()));
        let notes = screen.handle(UiEvent::CalculatePressed);
        assert_eq!(notes.len(), 1);
        assert!(matches!(&notes[0], Notification::TipRendered { display, .. } if display == "Tip Amount: 1.50"));
    }

    #[test]
    fn test_confirm_dismisses_keyboard_first() {
        let mut screen = TipScreen::new(PlainFormatter, InvalidInputPolicy::Reject);
        let notes = screen.handle(UiEvent::ConfirmKey);
        assert_eq!(notes[0], Notification::KeyboardDismissed);
        assert!(matches!(notes[1], Notification::TipRendered { tip, .. } if tip.is_zero()));
    }

    #[test]
    fn test_reject_policy_keeps_tip_uncomputed() {
        let mut screen = TipScreen::new(PlainFormatter, InvalidInputPolicy::Reject);
        screen.handle(UiEvent::CostEdited("abc".to_string()));
        let notes = screen.handle(UiEvent::CalculatePressed);
        match &notes[0] {
            Notification::ValidationFailed { message, display } => {
                assert_eq!(display, message);
                assert!(message.contains("abc"));
            }
            other => panic!("unexpected notification: {:?}", other),
        }
        assert!(matches!(screen.take_error(), Some(TipError::InvalidCost { .. })));
        assert!(screen.take_error().is_none());
    }

    #[test]
    fn test_reset_policy_shows_zero() {
        let mut screen = TipScreen::new(PlainFormatter, InvalidInputPolicy::ResetToZero);
        screen.handle(UiEvent::CostEdited("abc".to_string()));
        screen.handle(UiEvent::CalculatePressed);
        assert_eq!(screen.display(), "Tip Amount: 0.00");
    }
}
