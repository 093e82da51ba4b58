//! Localized strings used by the composer and the default formatters.

/// Every string the crate can ask a [`Localizer`] for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    SummaryTitle,
    TestsSuccess,
    TestsFail,
    CoverageHeading,
    CoverageDetailsSummary,
    ThresholdsHeading,
    FailuresHeading,
}

pub trait Localizer {
    fn text(&self, key: MessageKey) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn text(&self, key: MessageKey) -> String {
        let text = match key {
            MessageKey::SummaryTitle => "Coverage report {dir}",
            MessageKey::TestsSuccess => "✅ All tests passed",
            MessageKey::TestsFail => "❌ Some tests failed",
            MessageKey::CoverageHeading => "Coverage",
            MessageKey::CoverageDetailsSummary => "Show coverage for each file",
            MessageKey::ThresholdsHeading => "Coverage thresholds",
            MessageKey::FailuresHeading => "Show failing tests",
        };
        text.to_string()
    }
}
