//! Rendering of the generated `version.go` file.

use askama::Template;

use crate::error::{Error, Result};
use crate::version::VersionInfo;

/// The ECS CLI `version` package source.
#[derive(Template)]
#[template(
    ext = "txt",
    escape = "none",
    source = r#"// This is an autogenerated file and should not be edited.

// Copyright 2015-2017 Amazon.com, Inc. or its affiliates. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License"). You may
// not use this file except in compliance with the License. A copy of the
// License is located at
//
//	http://aws.amazon.com/apache2.0/
//
// or in the "license" file accompanying this file. This file is distributed
// on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either
// express or implied. See the License for the specific language governing
// permissions and limitations under the License.

// Package version contains constants to indicate the current version of the
// ecs-cli. It is autogenerated
package version

// Please DO NOT commit any changes to this file (specifically the hash) except
// for those created by running ./scripts/update-version at the root of the
// repository. Only the 'Version' const should change in checked-in source code

// Version is the version of the ECS CLI
const Version = "{{ info.version }}"

// GitDirty indicates the cleanliness of the git repo when this ecs-cli was built
const GitDirty = {{ info.dirty }}

// GitShortHash is the short hash of this ecs-cli build
const GitShortHash = "{{ info.hash }}"
"#
)]
struct VersionFile<'a> {
    info: &'a VersionInfo,
}

/// Render the version file for `info`.
///
/// # Errors
///
/// Returns [`Error::Render`] if the template fails to render.
pub fn render(info: &VersionInfo) -> Result<String> {
    let mut out = VersionFile { info }.render().map_err(Error::Render)?;
    // go sources end with a newline
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
