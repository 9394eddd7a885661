mod lookup;

pub use lookup::{render_outcome, LookupUseCase};
