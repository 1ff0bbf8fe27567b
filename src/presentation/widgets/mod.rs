mod notification_popup;
mod text_input;
mod user_form;
mod user_table;

pub use notification_popup::NotificationPopup;
pub use text_input::{InputKind, TextInput};
pub use user_form::{FormAction, FormMode, UserForm};
pub use user_table::{UserTable, UserTableState};
