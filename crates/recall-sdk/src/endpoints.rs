//! Canonical URL definitions for the memory backend.
//!
//! All backend URLs used by the application **must** be built through
//! [`ApiEndpoints`].  This keeps clients and tooling on a single naming
//! convention and gives the route layout exactly one home.
//!
//! # Route layout
//!
//! ```text
//! GET  {base}/api/people               ← enrolled people + face URLs
//! GET  {base}/api/conversation/{name}  ← per-person conversation log
//! POST {base}/api/process              ← multipart video upload
//! GET  {base}/faces/{file}             ← enrolled face images
//! ```

/// Central authority for backend URLs.
///
/// # Examples
///
/// ```
/// use recall_sdk::ApiEndpoints;
///
/// let base = "http://localhost:3000";
/// assert_eq!(
///     ApiEndpoints::people(base),
///     "http://localhost:3000/api/people",
/// );
/// assert_eq!(
///     ApiEndpoints::conversation(base, "tim"),
///     "http://localhost:3000/api/conversation/tim",
/// );
/// ```
pub struct ApiEndpoints;

impl ApiEndpoints {
    /// The enrolled-people listing.
    pub fn people(base: &str) -> String {
        format!("{}/api/people", base.trim_end_matches('/'))
    }

    /// The conversation log for one person.
    pub fn conversation(base: &str, name: &str) -> String {
        format!("{}/api/conversation/{name}", base.trim_end_matches('/'))
    }

    /// The video processing upload.
    pub fn process(base: &str) -> String {
        format!("{}/api/process", base.trim_end_matches('/'))
    }

    /// An enrolled face image.
    pub fn face_image(base: &str, file_name: &str) -> String {
        format!("{}/faces/{file_name}", base.trim_end_matches('/'))
    }

    /// Extract the person name from a face-image URL.
    ///
    /// The backend names face files after the person
    /// (`…/faces/tim.jpg` → `Some("tim")`). Returns `None` when the URL
    /// does not match the faces route.
    pub fn parse_face_person(url: &str) -> Option<&str> {
        let (_, file) = url.rsplit_once("/faces/")?;
        let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
        if stem.is_empty() {
            None
        } else {
            Some(stem)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
