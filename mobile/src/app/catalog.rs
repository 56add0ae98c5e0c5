//! # Page Catalog
//!
//! The closed set of pages the client can show, and the lookup from a page to
//! whatever the render layer uses to draw it.
//!
//! The catalog carries no navigation logic. Which slot a page reads
//! ([`Page::required_slot`]) and whether it only makes sense with a session
//! ([`Page::requires_auth`]) are descriptive: the controller never refuses a
//! transition because of them.

use std::collections::HashMap;
use std::fmt;

use crate::app::selection::SlotKind;

macro_rules! pages {
    ($($variant:ident => $key:literal, $title:literal;)*) => {
        /// Application pages
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Page {
            $($variant,)*
        }

        impl Page {
            const ALL: &'static [Page] = &[$(Page::$variant,)*];

            /// Identifier used by deep links and logs (`"conferenceForm"`, `"editProfile"`, ...)
            pub fn key(self) -> &'static str {
                match self {
                    $(Page::$variant => $key,)*
                }
            }

            /// Header title
            pub fn title(self) -> &'static str {
                match self {
                    $(Page::$variant => $title,)*
                }
            }

            /// Inverse of [`Page::key`]
            pub fn from_key(key: &str) -> Option<Page> {
                match key {
                    $($key => Some(Page::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

pages! {
    Home => "home", "Home";
    Login => "login", "Login";
    Register => "register", "Create Account";
    ForgotPassword => "forgotPassword", "Forgot Password";
    ResetPassword => "resetPassword", "Reset Password";
    OtpVerification => "otpVerification", "Verify Code";
    Board => "board", "Board Members";
    AboutUs => "aboutUs", "About Us";
    ContactUs => "contactUs", "Contact Us";
    News => "news", "News";
    NewsDetails => "newsDetails", "News";
    Events => "events", "Events";
    Gallery => "gallery", "Gallery";
    Conference => "conference", "Conference";
    ConferenceDetails => "conferenceDetails", "Conference Details";
    ConferenceForm => "conferenceForm", "Conference Registration";
    ConferencePayment => "conferencePayment", "Conference Payment";
    PaymentSuccess => "paymentSuccess", "Payment Successful";
    PaymentFailure => "paymentFailure", "Payment Failed";
    Sessions => "sessions", "Sessions";
    SessionDetails => "sessionDetails", "Session Details";
    MyConference => "myConference", "My Conference";
    MyConferenceSession => "myConferenceSession", "My Session";
    Speakers => "speakers", "Speakers";
    SpeakerDetails => "speakerDetails", "Speaker";
    Delegates => "delegates", "Delegates";
    DelegateDetails => "delegateDetails", "Delegate";
    Sponsors => "sponsors", "Sponsors";
    Exhibitors => "exhibitors", "Exhibitors";
    Membership => "membership", "Membership";
    MembershipForm => "membershipForm", "Membership Application";
    MembershipPayment => "membershipPayment", "Membership Payment";
    MembershipCard => "membershipCard", "Membership Card";
    Profile => "profile", "Profile";
    EditProfile => "editProfile", "Edit Profile";
    ChangePassword => "changePassword", "Change Password";
    PrivacySettings => "privacySettings", "Privacy Settings";
    PrivacyPolicy => "privacyPolicy", "Privacy Policy";
    Terms => "terms", "Terms & Conditions";
    Notifications => "notifications", "Notifications";
    Payments => "payments", "Payments";
    PaymentDetails => "paymentDetails", "Payment Details";
    Registrations => "registrations", "My Registrations";
    RegistrationDetails => "registrationDetails", "Registration";
    Certificates => "certificates", "Certificates";
    Feedback => "feedback", "Feedback";
    Faq => "faq", "FAQ";
}

impl Page {
    /// All pages in declaration order
    pub fn all() -> &'static [Page] {
        Self::ALL
    }

    /// Selection slot the page reads on render, if any
    pub fn required_slot(self) -> Option<SlotKind> {
        match self {
            Page::ConferenceForm => Some(SlotKind::Ticket),
            Page::SessionDetails => Some(SlotKind::Session),
            Page::MyConferenceSession => Some(SlotKind::MyConferenceSession),
            Page::SpeakerDetails => Some(SlotKind::Speaker),
            Page::DelegateDetails => Some(SlotKind::Delegate),
            Page::PaymentDetails => Some(SlotKind::Payment),
            Page::MembershipPayment => Some(SlotKind::MembershipForm),
            Page::ConferencePayment => Some(SlotKind::ConferencePayment),
            Page::RegistrationDetails => Some(SlotKind::RegistrationId),
            _ => None,
        }
    }

    /// Pages that only make sense for a signed-in member
    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Page::Profile
                | Page::EditProfile
                | Page::ChangePassword
                | Page::PrivacySettings
                | Page::MyConference
                | Page::MyConferenceSession
                | Page::MembershipCard
                | Page::MembershipPayment
                | Page::ConferencePayment
                | Page::Notifications
                | Page::Payments
                | Page::PaymentDetails
                | Page::Registrations
                | Page::RegistrationDetails
                | Page::Certificates
        )
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Association of pages to render targets.
///
/// `R` is whatever the render layer draws with (a screen object, a route
/// name, a factory closure). The catalog only stores and looks them up.
pub struct PageCatalog<R> {
    targets: HashMap<Page, R>,
}

impl<R> PageCatalog<R> {
    pub fn new() -> Self {
        Self {
            targets: HashMap::new(),
        }
    }

    /// Associate `page` with `target`, returning the target it replaces
    pub fn register(&mut self, page: Page, target: R) -> Option<R> {
        self.targets.insert(page, target)
    }

    /// Render target for `page`
    pub fn resolve(&self, page: Page) -> Option<&R> {
        self.targets.get(&page)
    }

    /// Pages with no render target, in declaration order
    pub fn missing(&self) -> Vec<Page> {
        Page::all()
            .iter()
            .copied()
            .filter(|page| !self.targets.contains_key(page))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<R> Default for PageCatalog<R> {
    fn default() -> Self {
        Self::new()
    }
}
