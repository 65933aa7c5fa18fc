//! Support page

use crate::support::{
    ContactChannel, Faq, SupportCategory, TrustIndicator, CONTACT_CHANNELS, FAQS,
    SUPPORT_CATEGORIES, SUPPORT_INTRO, SUPPORT_STATS, SUPPORT_TITLE, TRUST_INDICATORS,
};
use crate::types::Highlight;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SupportView {
    pub title: &'static str,
    pub intro: &'static str,
    pub stats: [Highlight; 3],
    pub categories: [SupportCategory; 4],
    pub faqs: [Faq; 8],
    pub channels: [ContactChannel; 3],
    pub trust: [TrustIndicator; 4],
}

impl Default for SupportView {
    fn default() -> Self {
        Self {
            title: SUPPORT_TITLE,
            intro: SUPPORT_INTRO,
            stats: SUPPORT_STATS,
            categories: SUPPORT_CATEGORIES,
            faqs: FAQS,
            channels: CONTACT_CHANNELS,
            trust: TRUST_INDICATORS,
        }
    }
}
