//! Demo user directory for the sample deployment.

use salut_core::{UserDirectory, UserRecord};

/// Builds the directory seeded at startup.
///
/// Four deliberately varied records: a French user, an English user, one
/// whose stored preferences are unusable, and one with no locale at all.
pub fn demo_directory() -> UserDirectory {
    UserDirectory::new([
        UserRecord::new(1, "Balou")
            .with_locale("fr")
            .with_timezone("Europe/Paris"),
        UserRecord::new(2, "Beyonce")
            .with_locale("en")
            .with_timezone("US/Central"),
        // Unsupported locale and an unknown timezone; both fall back at
        // resolution time.
        UserRecord::new(3, "Spock")
            .with_locale("kg")
            .with_timezone("Vulcan"),
        UserRecord::new(4, "Teletubby").with_timezone("Europe/London"),
    ])
}
