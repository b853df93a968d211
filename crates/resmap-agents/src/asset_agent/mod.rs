// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Acts as the agent for the resource asset subsystem.
//!
//! [`AssetAgent`] owns the resource manifest and the cache of loaded handles
//! for one asset domain, and delegates the actual loading and destruction of
//! assets to an engine-supplied backend. It answers existence queries from the
//! manifest alone, memoizes single loads per `(address, type)`, and performs
//! directory-scoped bulk loads for the built-in asset kinds.
//!
//! The agent is single-threaded: every call runs to completion on the calling
//! thread. Callers that share an agent across threads must serialize access.

pub mod agent;
mod bulk;

pub use agent::AssetAgent;
pub use bulk::SearchDepth;
