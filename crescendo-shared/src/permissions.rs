/// Role-based capability resolution
///
/// This module maps each account role to its fixed capability set and each
/// gated route to the single capability that unlocks it. Both mappings are
/// constant tables consulted by navigation and route guards — no state, no
/// side effects.
///
/// # Permission Model
///
/// 1. **Role → capabilities**: each of the four roles owns a fixed subset of
///    the nine capabilities (see the tables below)
/// 2. **Route → capability**: a gated route names exactly one capability;
///    routes absent from the table are visible to everyone (default-allow)
///
/// # Example
///
/// ```
/// use crescendo_shared::models::user::UserRole;
/// use crescendo_shared::permissions::{can_access_route, has_capability, Capability};
///
/// assert!(has_capability(UserRole::RecordLabel, Capability::AddArtists));
/// assert!(!has_capability(UserRole::Dj, Capability::AddArtists));
///
/// assert!(!can_access_route(UserRole::Dj, "/add-artist"));
/// assert!(can_access_route(UserRole::Dj, "/dashboard")); // unlisted: default-allow
/// ```

use serde::{Deserialize, Serialize};

use crate::models::user::UserRole;

/// The closed set of dashboard capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Upload singles and albums
    UploadMusic,

    /// Upload video content
    UploadVideo,

    /// View the earnings breakdown
    ViewEarnings,

    /// View the leaderboard
    ViewLeaderboard,

    /// View fan/subscriber analytics
    ViewFans,

    /// View sales history
    ViewSales,

    /// View payout history
    ViewPayments,

    /// Manage a roster of artists
    AddArtists,

    /// View account settings
    ViewSettings,
}

impl Capability {
    /// All capabilities, in a fixed order (used by exhaustive tests)
    pub const ALL: [Capability; 9] = [
        Capability::UploadMusic,
        Capability::UploadVideo,
        Capability::ViewEarnings,
        Capability::ViewLeaderboard,
        Capability::ViewFans,
        Capability::ViewSales,
        Capability::ViewPayments,
        Capability::AddArtists,
        Capability::ViewSettings,
    ];

    /// Converts capability to string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::UploadMusic => "upload_music",
            Capability::UploadVideo => "upload_video",
            Capability::ViewEarnings => "view_earnings",
            Capability::ViewLeaderboard => "view_leaderboard",
            Capability::ViewFans => "view_fans",
            Capability::ViewSales => "view_sales",
            Capability::ViewPayments => "view_payments",
            Capability::AddArtists => "add_artists",
            Capability::ViewSettings => "view_settings",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Capabilities of the artist role
const ARTIST_CAPABILITIES: &[Capability] = &[
    Capability::UploadMusic,
    Capability::ViewEarnings,
    Capability::ViewLeaderboard,
    Capability::ViewFans,
    Capability::ViewSales,
    Capability::ViewPayments,
    Capability::ViewSettings,
];

/// Capabilities of the dj role
const DJ_CAPABILITIES: &[Capability] = &[
    Capability::UploadMusic,
    Capability::ViewEarnings,
    Capability::ViewLeaderboard,
    Capability::ViewFans,
    Capability::ViewSettings,
];

/// Capabilities of the creator role
const CREATOR_CAPABILITIES: &[Capability] = &[
    Capability::UploadVideo,
    Capability::ViewEarnings,
    Capability::ViewFans,
    Capability::ViewSales,
    Capability::ViewPayments,
    Capability::ViewSettings,
];

/// Capabilities of the record-label role (all nine)
const RECORD_LABEL_CAPABILITIES: &[Capability] = &[
    Capability::UploadMusic,
    Capability::UploadVideo,
    Capability::ViewEarnings,
    Capability::ViewLeaderboard,
    Capability::ViewFans,
    Capability::ViewSales,
    Capability::ViewPayments,
    Capability::AddArtists,
    Capability::ViewSettings,
];

/// Route → gating capability table
///
/// Routes absent from this table are visible to every role.
const ROUTE_CAPABILITIES: &[(&str, Capability)] = &[
    ("/upload-music", Capability::UploadMusic),
    ("/upload-album", Capability::UploadMusic),
    ("/upload-video", Capability::UploadVideo),
    ("/earnings", Capability::ViewEarnings),
    ("/leaderboard", Capability::ViewLeaderboard),
    ("/fans", Capability::ViewFans),
    ("/sales", Capability::ViewSales),
    ("/payments", Capability::ViewPayments),
    ("/add-artist", Capability::AddArtists),
    ("/artists", Capability::AddArtists),
    ("/settings", Capability::ViewSettings),
];

/// Returns the fixed capability set for a role
pub fn role_capabilities(role: UserRole) -> &'static [Capability] {
    match role {
        UserRole::Artist => ARTIST_CAPABILITIES,
        UserRole::Dj => DJ_CAPABILITIES,
        UserRole::Creator => CREATOR_CAPABILITIES,
        UserRole::RecordLabel => RECORD_LABEL_CAPABILITIES,
    }
}

/// Checks whether a role holds a capability
pub fn has_capability(role: UserRole, capability: Capability) -> bool {
    role_capabilities(role).contains(&capability)
}

/// Returns the capability gating a route, if the route is gated at all
pub fn route_capability(route: &str) -> Option<Capability> {
    ROUTE_CAPABILITIES
        .iter()
        .find(|(gated, _)| *gated == route)
        .map(|(_, capability)| *capability)
}

/// Checks whether a role may access a route
///
/// Routes not present in the gate table are accessible to everyone.
pub fn can_access_route(role: UserRole, route: &str) -> bool {
    match route_capability(route) {
        Some(capability) => has_capability(role, capability),
        None => true,
    }
}
