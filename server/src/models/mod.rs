pub mod event;
pub mod speaker;
pub mod timestamp;

pub use event::{Event, EventInput, EventWithSpeakers};
pub use speaker::{Speaker, SpeakerInput};
