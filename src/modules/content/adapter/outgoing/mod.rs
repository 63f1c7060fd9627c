pub mod mirror_file;
pub mod mirror_memory;
pub mod resource_api_http;

pub use mirror_file::FileMirrorStore;
pub use mirror_memory::InMemoryMirrorStore;
pub use resource_api_http::HttpResourceApi;
