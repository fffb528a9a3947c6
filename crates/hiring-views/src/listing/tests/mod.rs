mod common;
mod paging;
mod search;
