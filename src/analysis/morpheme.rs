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

use std::cell::Ref;

use crate::analysis::mlist::MorphemeList;
use crate::analysis::node::{LatticeNode, ResultNode};
use crate::analysis::stateless_tokenizer::DictionaryAccess;
use crate::dic::lexicon::word_infos::WordInfo;
use crate::dic::word_id::WordId;
use crate::prelude::*;

/// A morpheme (basic semantic unit of language)
pub struct Morpheme<'a, T> {
    list: &'a MorphemeList<T>,
    index: usize,
}

impl<'a, T> Morpheme<'a, T> {
    #[inline]
    pub(crate) fn for_list(list: &'a MorphemeList<T>, index: usize) -> Morpheme<'a, T> {
        debug_assert!(index < list.len());
        Morpheme { list, index }
    }
}

impl<T> Morpheme<'_, T> {
    #[inline]
    fn node(&self) -> &ResultNode {
        self.list.node(self.index)
    }

    /// Returns the begin offset (in bytes) of morpheme in the original text
    pub fn begin(&self) -> usize {
        let node = self.node();
        self.list.input().to_orig_byte_idx(node.begin())
    }

    /// Returns the end offset (in bytes) of morpheme in the original text
    pub fn end(&self) -> usize {
        let node = self.node();
        self.list.input().to_orig_byte_idx(node.end())
    }

    /// Returns a substring of the original text which corresponds to the morpheme
    pub fn surface(&self) -> Ref<str> {
        let range = self.node().char_range();
        Ref::map(self.list.input(), |i| i.orig_slice_c(range.clone()))
    }

    pub fn part_of_speech_id(&self) -> u16 {
        self.get_word_info().pos_id()
    }

    /// Returns the dictionary form of morpheme
    ///
    /// "Dictionary form" means a word's lemma and "終止形" in Japanese.
    pub fn dictionary_form(&self) -> &str {
        self.get_word_info().dictionary_form()
    }

    /// Returns the normalized form of morpheme
    ///
    /// This method returns the form normalizing inconsistent spellings and inflected forms
    pub fn normalized_form(&self) -> &str {
        self.get_word_info().normalized_form()
    }

    /// Returns the reading form of morpheme.
    ///
    /// Returns Japanese syllabaries 'フリガナ' in katakana.
    pub fn reading_form(&self) -> &str {
        self.get_word_info().reading_form()
    }

    /// Returns if this morpheme is out of vocabulary
    pub fn is_oov(&self) -> bool {
        self.node().is_oov()
    }

    /// Returns the word id of morpheme
    pub fn word_id(&self) -> WordId {
        self.node().word_id()
    }

    /// Returns the dictionary id where the morpheme belongs
    ///
    /// Returns -1 if the morpheme is oov
    pub fn dictionary_id(&self) -> i32 {
        let wid = self.word_id();
        if wid.is_oov() {
            -1
        } else {
            wid.dic() as i32
        }
    }

    pub fn synonym_group_ids(&self) -> &[u32] {
        self.get_word_info().synonym_group_ids()
    }

    pub fn get_word_info(&self) -> &WordInfo {
        self.node().word_info()
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T: DictionaryAccess> Morpheme<'_, T> {
    /// Returns the part of speech
    pub fn part_of_speech(&self) -> SudachiResult<&[String]> {
        let pos_id = self.part_of_speech_id();
        let pos = self
            .list
            .dict()
            .grammar()
            .pos_list
            .get(pos_id as usize)
            .ok_or(SudachiError::MissingPartOfSpeech)?;
        Ok(pos)
    }
}

impl<T: DictionaryAccess + Clone> Morpheme<'_, T> {
    /// Returns new morpheme list splitting the morpheme with given mode.
    #[allow(deprecated)]
    pub fn split(&self, mode: Mode) -> SudachiResult<MorphemeList<T>> {
        self.list.split(mode, self.index)
    }
}

impl<T: DictionaryAccess> std::fmt::Debug for Morpheme<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Morpheme")
            .field("surface", &self.surface().to_owned())
            .field("pos", &self.part_of_speech())
            .field("normalized_form", &self.normalized_form())
            .field("reading_form", &self.reading_form())
            .field("dictionary_form", &self.dictionary_form())
            .finish()
    }
}
