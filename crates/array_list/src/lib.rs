mod array_list;
mod cursor;
mod error;
mod sub_list;
mod traits;

pub use array_list::{ArrayList, Iter};
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use sub_list::SubList;
pub use traits::{Sequence, element_hash};
