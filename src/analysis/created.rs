/*
 *  Copyright (c) 2021 Works Applications Co., Ltd.
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use std::cmp::min;

type Carrier = u64;

/// Result of a [`CreatedWords::has_word`] query.
///
/// Word lengths beyond [`CreatedWords::MAX_VALUE`] all collapse onto the
/// same saturated bit, so a set bit there does not by itself tell us that
/// a word of the *queried* length was created: the caller must confirm by
/// scanning the actual nodes produced so far.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum HasWord {
    Yes,
    No,
    Maybe,
}

#[derive(Copy, Clone, Eq, PartialEq, Default)]
#[repr(transparent)]
pub struct CreatedWords(Carrier);

impl CreatedWords {
    const MAX_VALUE: Carrier = 63;

    pub fn empty() -> CreatedWords {
        return Default::default();
    }

    pub fn single<Pos: Into<i64>>(position: Pos) -> CreatedWords {
        let raw = position.into();
        debug_assert!(raw > 0);
        let raw = raw as Carrier;
        let shift = min(raw.saturating_sub(1), CreatedWords::MAX_VALUE);
        let bits = (1 as Carrier) << shift;
        CreatedWords(bits)
    }

    #[must_use]
    pub fn add_word<P: Into<i64>>(&self, position: P) -> CreatedWords {
        let mask = CreatedWords::single(position);
        return self.add(mask);
    }

    #[must_use]
    pub fn add(&self, other: CreatedWords) -> CreatedWords {
        CreatedWords(self.0 | other.0)
    }

    /// Checks whether a word of the given length was already created at this boundary.
    ///
    /// Returns [`HasWord::Maybe`] when the length falls on the saturated bit shared
    /// by every length beyond [`CreatedWords::MAX_VALUE`], in which case the caller
    /// must check actual node lengths to disambiguate.
    pub fn has_word<P: Into<i64>>(&self, position: P) -> HasWord {
        let raw = position.into();
        debug_assert!(raw > 0);
        let saturated = (raw as Carrier).saturating_sub(1) >= CreatedWords::MAX_VALUE;
        let mask = CreatedWords::single(raw);
        if (self.0 & mask.0) == 0 {
            HasWord::No
        } else if saturated {
            HasWord::Maybe
        } else {
            HasWord::Yes
        }
    }

    pub fn is_empty(&self) -> bool {
        return self.0 == 0;
    }

    pub fn not_empty(&self) -> bool {
        return !self.is_empty();
    }
}
