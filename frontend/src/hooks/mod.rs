pub mod list_state;
pub mod use_paginated_list;
pub mod use_visibility_trigger;

pub use use_paginated_list::{use_paginated_list, PageFetcher, UsePaginatedListResult};
pub use use_visibility_trigger::use_visibility_trigger;
