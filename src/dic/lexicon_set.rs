/*
 * Copyright (c) 2021 Works Applications Co., Ltd.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use thiserror::Error;

use crate::dic::lexicon::word_infos::{WordInfo, WordInfoData};
use crate::dic::lexicon::{Lexicon, LexiconEntry, MAX_DICTIONARIES};
use crate::dic::subset::InfoSubset;
use crate::dic::word_id::WordId;
use crate::prelude::*;

/// Sudachi error
#[derive(Error, Debug, Eq, PartialEq)]
pub enum LexiconSetError {
    #[error("too large word_id {0} in dict {1}")]
    TooLargeWordId(u32, usize),

    #[error("too large dictionary_id {0}")]
    TooLargeDictionaryId(usize),

    #[error("too many user dictionaries")]
    TooManyDictionaries,
}

/// Set of Lexicons
///
/// Handles multiple lexicons as one lexicon
/// The first lexicon in the list must be from system dictionary
pub struct LexiconSet<'a> {
    lexicons: Vec<Lexicon<'a>>,
    pos_offsets: Vec<usize>,
}

impl<'a> LexiconSet<'a> {
    /// Creates a LexiconSet given a lexicon
    ///
    /// It is assumed that the passed lexicon is the system dictionary
    pub fn new(mut system_lexicon: Lexicon) -> LexiconSet {
        system_lexicon.set_dic_id(0);
        LexiconSet {
            lexicons: vec![system_lexicon],
            pos_offsets: vec![0],
        }
    }

    /// Add a lexicon to the lexicon list
    ///
    /// pos_offset: number of pos in the grammar
    pub fn append(
        &mut self,
        mut lexicon: Lexicon<'a>,
        pos_offset: usize,
    ) -> Result<(), LexiconSetError> {
        if self.is_full() {
            return Err(LexiconSetError::TooManyDictionaries);
        }
        lexicon.set_dic_id(self.lexicons.len() as u8);
        self.lexicons.push(lexicon);
        self.pos_offsets.push(pos_offset);
        Ok(())
    }

    /// Returns if dictionary capacity is full
    pub fn is_full(&self) -> bool {
        self.lexicons.len() >= MAX_DICTIONARIES
    }
}

impl LexiconSet<'_> {
    /// Returns iterator which yields all words in the dictionary, starting from the `offset` bytes
    ///
    /// Searches dictionaries in the reverse order: user dictionaries first and then system dictionary
    #[inline]
    pub fn lookup<'b>(
        &'b self,
        input: &'b [u8],
        offset: usize,
    ) -> impl Iterator<Item = LexiconEntry> + 'b {
        // word_id fixup was moved to lexicon itself
        self.lexicons
            .iter()
            .rev()
            .flat_map(move |l| l.lookup(input, offset))
    }

    /// Returns word_info for given word_id, resolving every field the subset selects
    pub fn get_word_info_subset(&self, word_id: WordId, subset: InfoSubset) -> SudachiResult<WordInfo> {
        let dict_id = word_id.dic() as usize;
        let mut data: WordInfoData = self.lexicons[dict_id]
            .get_word_info(word_id.word(), subset)?
            .into();
        let pos_id = data.pos_id;
        if dict_id > 0 && pos_id as usize >= self.pos_offsets[1] {
            // user defined part-of-speech
            data.pos_id = (pos_id as usize - self.pos_offsets[1] + self.pos_offsets[dict_id]) as u16;
        }
        self.update_dict_id(&mut data.a_unit_split, dict_id);
        self.update_dict_id(&mut data.b_unit_split, dict_id);
        self.update_dict_id(&mut data.word_structure, dict_id);

        Ok(data.into())
    }

    /// Returns word_info for given word_id, resolving all fields
    pub fn get_word_info(&self, word_id: WordId) -> SudachiResult<WordInfo> {
        self.get_word_info_subset(word_id, InfoSubset::all())
    }

    /// Returns word_param for given word_id
    pub fn get_word_param(&self, word_id: WordId) -> (i16, i16, i16) {
        self.lexicons[word_id.dic() as usize].get_word_param(word_id.word())
    }

    pub fn get_dictionary_id(word_id: WordId) -> usize {
        word_id.dic() as usize
    }

    /// Splits reference words inside the same (not-yet-appended) dictionary using
    /// a placeholder dic_id of 1; patch those up to the dic_id this lexicon was
    /// actually assigned once appended to the set. References into the system
    /// dictionary (dic_id 0) are absolute already and are left untouched.
    fn update_dict_id(&self, split: &mut [WordId], dict_id: usize) {
        for w in split.iter_mut() {
            if w.dic() as usize > 0 {
                *w = WordId::new(dict_id as u8, w.word());
            }
        }
    }

    pub fn size(&self) -> u32 {
        self.lexicons.iter().fold(0, |acc, lex| acc + lex.size())
    }
}
