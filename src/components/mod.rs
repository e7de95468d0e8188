pub mod edit_task_modal;
pub mod task_form;
pub mod task_list;
pub mod toast;

pub use edit_task_modal::EditTaskModal;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use toast::Toast;
