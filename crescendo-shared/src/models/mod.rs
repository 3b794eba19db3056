/// Domain models for the Crescendo dashboard client
///
/// Each submodule owns one slice of the domain:
///
/// - `user`: account identity, roles, and auth request/response shapes
/// - `artist`: label-managed artist sub-profiles
/// - `notification`: ephemeral toast records
/// - `upload`: in-progress upload drafts with base64 file payloads
/// - `location`: country/state reference data
/// - `stats`: typed dashboard/earnings/leaderboard payloads

pub mod artist;
pub mod location;
pub mod notification;
pub mod stats;
pub mod upload;
pub mod user;

pub use artist::{Artist, CreateArtist, UpdateArtist};
pub use location::{Country, StateProvince};
pub use notification::{Notification, NotificationKind};
pub use upload::{AlbumDraft, AlbumTrackDraft, FilePayload, TrackDraft, VideoDraft};
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User, UserRole, UserUpdate};
