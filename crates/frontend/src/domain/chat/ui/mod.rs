mod input;
mod message;
mod typewriter;
mod view;

pub use view::ChatView;
