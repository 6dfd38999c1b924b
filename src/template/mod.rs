//! Node-chain template instantiation
//!
//! A node-chain template is YAML text containing placeholder keys such as
//! `_lr` or `~window`. Instantiation replaces every placeholder with the
//! value from a [`ParameterSetting`] and parses the result:
//!
//! ```
//! use spacetune::template::{instantiate_text, ParameterSetting};
//!
//! let setting = ParameterSetting::new().with("_c", 2.75);
//! let chain = instantiate_text("- node: Svm\n  parameters: {complexity: _c}", &setting)?;
//! assert_eq!(chain.value[0]["parameters"]["complexity"].as_f64(), Some(2.75));
//! # Ok::<(), spacetune::Error>(())
//! ```
//!
//! Writing `#_c#` keeps the literal text `_c` instead of substituting it.

mod encode;
mod extract;
mod lexer;
mod setting;
mod structural;
mod substitute;


pub use encode::{literal_text, plain_text, yaml_text};
pub use extract::extract_key_str;
pub use lexer::{tokenize, Token};
pub use setting::{is_regular_key, ParameterSetting, REGULAR_PREFIXES};
pub use structural::{replace_in_dict, replace_in_list, replace_in_value, replace_parameters_structural};
pub use substitute::{instantiate, instantiate_document, instantiate_text, replace_parameters, TemplateSpec};
