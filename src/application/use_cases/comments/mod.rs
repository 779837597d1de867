//! Comment Use Cases

mod create_comment;
mod delete_comment;
mod get_comment_thread;

pub use create_comment::CreateCommentUseCase;
pub use delete_comment::DeleteCommentUseCase;
pub use get_comment_thread::GetCommentThreadUseCase;
