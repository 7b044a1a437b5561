//! Helpers for classifying and rendering project member lists.
//!
//! All functions here are pure. The owner/member split is a total,
//! exclusive partition: every member lands in exactly one of the two
//! groups, in its original position relative to the rest of its group.

use crate::project::Member;

/// Members holding the distinguished owning role, in original order.
pub fn project_owners(members: &[Member]) -> Vec<&Member> {
    members.iter().filter(|m| m.is_project_owner()).collect()
}

/// Members not holding the owning role, in original order.
pub fn project_members(members: &[Member]) -> Vec<&Member> {
    members.iter().filter(|m| !m.is_project_owner()).collect()
}

/// Render a member list as a comma-separated string of full names.
///
/// Accepts either a member slice or the borrowed output of
/// [`project_owners`]/[`project_members`]. Members are de-duplicated by
/// `person.username` (the stable identity key), keeping the first
/// occurrence. An empty list renders as `""`.
pub fn members_to_string<'a, I>(members: I) -> String
where
    I: IntoIterator<Item = &'a Member>,
{
    let mut seen: Vec<&str> = Vec::new();
    members
        .into_iter()
        .filter(|m| {
            let username = m.person.username.as_str();
            if seen.contains(&username) {
                false
            } else {
                seen.push(username);
                true
            }
        })
        .map(|m| m.person.full_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
