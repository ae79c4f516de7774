//! Built-in template text for the generated client service.
//!
//! Tokens available to each template:
//!
//! - service: `CLASS`, `DESCRIPTION`, `CONSTRUCTOR`, `METHODS`, `MODULE`, `SERVICE`
//! - method: `DOC`, `NAME`, `ARGS`, `PRELUDE`, `TYPECAST`, `VERB`, `CALL`, `TYPES`
//! - output types: `RESULT`, `PROPERTIES`, `PROMISE`

use serde::{Deserialize, Serialize};

pub const SERVICE_TEMPLATE: &str = r#"/*
 * THIS FILE IS GENERATED AUTOMATICALLY. DO NOT EDIT IT BY HAND.
 * Source class: ___CLASS___
 */

/**
___DESCRIPTION___
 *
 * @param {ApiClient} apiClient
 * @constructor
 */
function ___CONSTRUCTOR___(apiClient) {
    var service = this;

___METHODS___
}

angular.module('___MODULE___').service('___SERVICE___', ['apiClient', ___CONSTRUCTOR___]);
"#;

pub const METHOD_TEMPLATE: &str = r#"___DOC___
service.___NAME___ = function (___ARGS___) {
___PRELUDE___    return ___TYPECAST___(apiClient.___VERB___(___CALL___));
};

___TYPES___
"#;

pub const OUTPUT_TYPES_TEMPLATE: &str = r#"/**
 * @typedef {Object} ___RESULT___
___PROPERTIES___
 */

/**
 * @typedef {Promise<___RESULT___>} ___PROMISE___
 */"#;

/// Template text handed to the renderer at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Templates {
    pub service: String,
    pub method: String,
    pub output_types: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            service: SERVICE_TEMPLATE.to_string(),
            method: METHOD_TEMPLATE.to_string(),
            output_types: OUTPUT_TYPES_TEMPLATE.to_string(),
        }
    }
}
