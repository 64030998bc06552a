pub mod profile;
pub mod session;
pub mod user;

/*
 One user row per account, created at registration. The profile row is
 secondary presentation data (avatar) and is created lazily the first
 time the profile is viewed or edited. Sessions are plain rows keyed by
 a token digest: login inserts one, logout deletes it.
 */
