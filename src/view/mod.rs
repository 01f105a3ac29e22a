//! View layer: presenters, fragment rendering, templates, queries.
//!
//! | Module  | Role                                              |
//! | ------- | ------------------------------------------------- |
//! | `model` | Pure presenters producing serializable view records |
//! | `html`  | [`html::FragmentRender`] and the stock HTML renderer |
//! | `page`  | Page templates with id-addressed placeholders     |
//! | `query` | Typed listing query strings                       |

pub mod html;
pub mod model;
pub mod page;
pub mod query;
