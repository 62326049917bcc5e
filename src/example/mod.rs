pub mod example;
pub mod folder;
pub mod list_file;

pub use example::{Example, Label};
pub use folder::{get_example_list_from_folder, FolderExamples};
pub use list_file::get_example_list_from_file;
