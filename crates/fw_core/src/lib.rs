pub mod error;
pub mod models;
pub mod sources;
pub mod themes;
pub mod time;
pub mod types;

pub use error::{Error, Result};
pub use models::SummaryModel;
pub use sources::{NewsSource, QuoteSource};
pub use themes::{classify, Theme};
pub use types::{Article, ChartSnapshot, Quote, RawArticle};

pub mod prelude {
    pub use crate::{Article, Error, Quote, RawArticle, Result, Theme};
    pub use crate::{NewsSource, QuoteSource, SummaryModel};
}
