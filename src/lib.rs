//! Vigil - content pipeline and page assembly for a static advocacy site.
//!
//! | Module    | Role                                               |
//! | --------- | -------------------------------------------------- |
//! | `content` | Front matter, markdown, and record projections     |
//! | `repo`    | Remote content fetching, the store, and filters    |
//! | `view`    | Presenters, fragment rendering, templates, queries |
//! | `motion`  | Animation lifecycle state machine                  |
//! | `build`   | Site assembly into the output directory            |
//! | `serve`   | Local preview server                               |

pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod logger;
pub mod motion;
pub mod repo;
pub mod serve;
pub mod utils;
pub mod view;
