/// Id of the mount point in `index.html`
pub const ROOT_ELEMENT_ID: &str = "app";

/// Window event dispatched after an in-app route change
pub const ROUTE_CHANGE_EVENT: &str = "routechange";

pub const MSG_BLOG_CREATED: &str = "Blog created successfully!";
pub const MSG_BLOG_UPDATED: &str = "Blog updated successfully!";
pub const MSG_SAVE_FAILED: &str = "Failed to save blog.";
pub const MSG_DELETE_FAILED: &str = "Failed to delete blog.";
