pub mod api_ninjas;
pub mod dummyjson;
pub mod frankfurter;
pub mod quotable;
pub mod relay;
pub mod typefit;
pub mod util;
pub mod zenquotes;
