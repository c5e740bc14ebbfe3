// owner.rs — File ownership lookup
//
// Resolves uid/gid to display strings through the system identity database.
// A failed lookup falls back to the numeric id rendered as a string, so the
// caller always receives something printable.

/// Display string for a user id.  With `numeric` the id is rendered
/// directly without a database lookup.
pub fn user_display_name(uid: u32, numeric: bool) -> String {
    if numeric {
        return uid.to_string();
    }

    match uzers::get_user_by_uid(uid) {
        Some(user) => user.name().to_string_lossy().into_owned(),
        None => uid.to_string(),
    }
}

/// Display string for a group id, numeric fallback as above.
pub fn group_display_name(gid: u32, numeric: bool) -> String {
    if numeric {
        return gid.to_string();
    }

    match uzers::get_group_by_gid(gid) {
        Some(group) => group.name().to_string_lossy().into_owned(),
        None => gid.to_string(),
    }
}
