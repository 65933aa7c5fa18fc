//! Support page content and the contact form
//!
//! Everything here is static display content except [`ContactForm`], which is
//! validated and acknowledged but never sent anywhere.

use crate::error::SupportError;
use crate::types::{Highlight, Notification};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SupportCategory {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ContactChannel {
    pub name: &'static str,
    pub description: &'static str,
    pub availability: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrustIndicator {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SUPPORT_TITLE: &str = "How Can We Help You?";
pub const SUPPORT_INTRO: &str = "We're here to ensure you have the best reading experience. Browse our FAQs or contact our support team.";

pub const SUPPORT_STATS: [Highlight; 3] = [
    Highlight::new("< 2 hours", "Average response time"),
    Highlight::new("24/7", "Digital book access"),
    Highlight::new("99.9%", "Customer satisfaction"),
];

pub const SUPPORT_CATEGORIES: [SupportCategory; 4] = [
    SupportCategory {
        title: "Reading & Books",
        description: "Help with digital reading, book access, and library management",
    },
    SupportCategory {
        title: "Orders & Payments",
        description: "Billing questions, refunds, and payment methods",
    },
    SupportCategory {
        title: "Shipping & Delivery",
        description: "Track orders, shipping options, and delivery issues",
    },
    SupportCategory {
        title: "Account & Security",
        description: "Account settings, password reset, and security concerns",
    },
];

pub const FAQS: [Faq; 8] = [
    Faq {
        question: "How do I access my digital books?",
        answer: "After purchasing a digital book, it will appear in your library. Click on the book cover to open the built-in reader. Your books are accessible 24/7 from any device.",
    },
    Faq {
        question: "Can I download books to read offline?",
        answer: "For security and copyright protection, our digital books can only be read through our online reader platform. This ensures authors' rights are protected while giving you access anywhere with internet.",
    },
    Faq {
        question: "What's your return policy?",
        answer: "Digital books can be refunded within 7 days of purchase if you haven't read more than 20% of the book. Physical books can be returned within 30 days in original condition.",
    },
    Faq {
        question: "Do you offer international shipping?",
        answer: "Yes! We ship physical books worldwide. Shipping costs and delivery times vary by location. Digital books are available instantly worldwide.",
    },
    Faq {
        question: "How do I reset my password?",
        answer: "Click the 'Forgot Password' link on the login page, enter your email address, and we'll send you instructions to reset your password.",
    },
    Faq {
        question: "Can I gift books to others?",
        answer: "Absolutely! During checkout, select 'This is a gift' and enter the recipient's email. They'll receive instructions on how to access their gifted book.",
    },
    Faq {
        question: "What payment methods do you accept?",
        answer: "We accept all major credit cards (Visa, MasterCard, American Express), PayPal, Apple Pay, and Google Pay for secure transactions.",
    },
    Faq {
        question: "How do I track my physical book order?",
        answer: "You'll receive a tracking number via email once your order ships. You can also check your order status in your account under 'Order History'.",
    },
];

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        name: "Email Support",
        description: "Get detailed help via email",
        availability: "Response within 2 hours",
    },
    ContactChannel {
        name: "Phone Support",
        description: "Speak directly with our team",
        availability: "Mon-Fri 9AM-9PM EST",
    },
    ContactChannel {
        name: "Live Chat",
        description: "Instant help from our experts",
        availability: "Available 24/7",
    },
];

pub const TRUST_INDICATORS: [TrustIndicator; 4] = [
    TrustIndicator {
        title: "Secure & Private",
        description: "Bank-level security for all transactions",
    },
    TrustIndicator {
        title: "Top Rated",
        description: "4.9/5 stars from 50,000+ customers",
    },
    TrustIndicator {
        title: "Fast Support",
        description: "Quick responses when you need help",
    },
    TrustIndicator {
        title: "Book Experts",
        description: "Passionate readers helping readers",
    },
];

pub const CONTACT_CONFIRMATION: &str =
    "Your message has been sent! We'll get back to you within 24 hours.";

/// The "Send us a message" form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Check required fields and the email shape
    pub fn validate(&self) -> Result<(), SupportError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(SupportError::MissingField(*field));
        }

        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(SupportError::InvalidEmail(email.to_string())),
        }
    }

    /// Acknowledge a valid submission and clear the form
    pub fn submit(&mut self) -> Result<Notification, SupportError> {
        self.validate()?;
        tracing::info!(subject = %self.subject.trim(), "Support message received");
        *self = Self::default();
        Ok(Notification::success(CONTACT_CONFIRMATION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Reader".into(),
            message: "The reader will not open.".into(),
        }
    }

    #[test]
    fn test_submit_clears_form() {
        let mut form = filled();
        let notification = form.submit().unwrap();
        assert_eq!(notification.message, CONTACT_CONFIRMATION);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.subject = "   ".into();
        assert_eq!(form.validate(), Err(SupportError::MissingField("subject")));

        let form = ContactForm::default();
        assert_eq!(form.validate(), Err(SupportError::MissingField("name")));
    }

    #[test]
    fn test_invalid_email_keeps_form() {
        let mut form = filled();
        form.email = "ada@".into();
        assert_eq!(
            form.submit(),
            Err(SupportError::InvalidEmail("ada@".into()))
        );
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_static_content_sizes() {
        assert_eq!(SUPPORT_CATEGORIES.len(), 4);
        assert_eq!(FAQS.len(), 8);
        assert_eq!(CONTACT_CHANNELS.len(), 3);
    }
}
