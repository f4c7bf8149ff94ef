/// Role ids as issued by the backend. Role `0` doubles as "not
/// authenticated": a default profile carries it until a login or a
/// successful hydration replaces it.
pub const ROLE_GUEST: i64 = 0;
pub const ROLE_USER: i64 = 1;
pub const ROLE_ADMIN: i64 = 2;

pub fn is_admin_role(role_id: i64) -> bool {
    role_id == ROLE_ADMIN
}

pub fn role_name(role_id: i64) -> &'static str {
    match role_id {
        ROLE_GUEST => "Guest",
        ROLE_USER => "User",
        ROLE_ADMIN => "Admin",
        _ => "Unknown",
    }
}
