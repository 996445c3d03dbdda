pub(crate) mod dashboard;
pub(crate) mod details;
pub(crate) mod sidebar;
