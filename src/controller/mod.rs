pub use download_controller::send_file;
pub use upload_controller::receive_file;

mod download_controller;
mod upload_controller;
