//! Scored guess and answer pools
//!
//! The answer pool holds every word still consistent with the feedback seen
//! so far. The guess pool is the full legal vocabulary and is only ever
//! shrunk by removing played words, so probe words that cannot be the answer
//! stay available to the intersecting heuristic.

use super::LetterFrequency;
use crate::constraints::ConstraintState;
use crate::core::{ALPHABET_LEN, PositionMask, Word, used_letters};
use rustc_hash::FxHashSet;

/// Remaining answers must be strictly more than this for an intersecting probe
const INTERSECTING_MIN: usize = 2;

/// Remaining answers must be strictly fewer than this for an intersecting probe
const INTERSECTING_MAX: usize = 50;

/// A word paired with its frequency score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateWord {
    pub word: Word,
    pub score: u32,
}

impl CandidateWord {
    #[must_use]
    pub const fn new(word: Word, score: u32) -> Self {
        Self { word, score }
    }
}

/// Answer and guess pools, each sorted by descending score
#[derive(Debug, Clone)]
pub struct CandidateStore {
    frequency: LetterFrequency,
    mask: PositionMask,
    guess_pool: Vec<CandidateWord>,
    answer_pool: Vec<CandidateWord>,
    use_intersecting: bool,
}

impl CandidateStore {
    /// Build both pools from a corpus.
    ///
    /// Letter frequencies come from `answers` alone. The guess pool is
    /// `guesses` followed by `answers` with duplicates dropped (first
    /// occurrence wins) and is scored by total letter frequency; the answer
    /// pool is scored positionally. Sorting is stable so equal scores keep
    /// corpus order.
    #[must_use]
    pub fn new(answers: &[Word], guesses: &[Word], use_intersecting: bool) -> Self {
        let frequency = LetterFrequency::from_words(answers);
        let mask = PositionMask::from_words(answers);

        let mut seen = FxHashSet::default();
        let mut guess_pool: Vec<CandidateWord> = guesses
            .iter()
            .chain(answers)
            .filter(|word| seen.insert(*word))
            .map(|word| CandidateWord::new(word.clone(), frequency.score(word, false)))
            .collect();
        guess_pool.sort_by(|a, b| b.score.cmp(&a.score));

        let mut seen = FxHashSet::default();
        let mut answer_pool: Vec<CandidateWord> = answers
            .iter()
            .filter(|word| seen.insert(*word))
            .map(|word| CandidateWord::new(word.clone(), frequency.score(word, true)))
            .collect();
        answer_pool.sort_by(|a, b| b.score.cmp(&a.score));

        Self {
            frequency,
            mask,
            guess_pool,
            answer_pool,
            use_intersecting,
        }
    }

    /// Frequency score of `word` against this store's answer corpus
    #[must_use]
    pub fn score(&self, word: &Word, positional: bool) -> u32 {
        self.frequency.score(word, positional)
    }

    /// Keep only the answers that satisfy `constraints`
    pub fn filter(&mut self, constraints: &ConstraintState) {
        let mask = constraints.mask();
        self.answer_pool.retain(|candidate| {
            mask.admits(&candidate.word) && constraints.consistent(&candidate.word)
        });
    }

    /// Drop a played word from both pools
    pub fn remove_guessed(&mut self, word: &Word) {
        self.answer_pool.retain(|candidate| candidate.word != *word);
        self.guess_pool.retain(|candidate| candidate.word != *word);
    }

    /// Probe word covering the letters that still split a small answer pool.
    ///
    /// Each letter not played in `history` scores one point per remaining
    /// answer that contains it. The guess-pool word with the highest total over its
    /// distinct letters wins; ties go to the higher positional score, then to
    /// the earlier word in the pool.
    #[must_use]
    pub fn intersecting_guess(&self, history: &[Word]) -> Option<Word> {
        let remaining = self.answer_pool.len();
        if !self.use_intersecting || remaining <= INTERSECTING_MIN || remaining >= INTERSECTING_MAX {
            return None;
        }

        let used = used_letters(history);
        let mut coverage = [0u32; ALPHABET_LEN];
        for candidate in &self.answer_pool {
            for letter in candidate.word.letters().difference(used).iter() {
                coverage[usize::from(letter - b'A')] += 1;
            }
        }

        let mut best: Option<(&Word, u32, u32)> = None;
        for candidate in &self.guess_pool {
            let cover: u32 = candidate
                .word
                .letters()
                .iter()
                .map(|letter| coverage[usize::from(letter - b'A')])
                .sum();
            if cover == 0 {
                continue;
            }
            if let Some((_, best_cover, _)) = best
                && cover < best_cover
            {
                continue;
            }

            let positional = self.frequency.score(&candidate.word, true);
            match best {
                Some((_, best_cover, best_positional))
                    if (cover, positional) <= (best_cover, best_positional) => {}
                _ => best = Some((&candidate.word, cover, positional)),
            }
        }

        best.map(|(word, _, _)| word.clone())
    }

    /// Intersecting probe when one applies, else the best remaining answer
    #[must_use]
    pub fn next_guess(&self, history: &[Word]) -> Option<Word> {
        self.intersecting_guess(history)
            .or_else(|| self.answer_pool.first().map(|candidate| candidate.word.clone()))
    }

    /// 1-based rank of `word` in the guess pool, with the pool size
    #[must_use]
    pub fn rank_of(&self, word: &Word) -> Option<(usize, usize)> {
        self.guess_pool
            .iter()
            .position(|candidate| candidate.word == *word)
            .map(|index| (index + 1, self.guess_pool.len()))
    }

    /// Guess-pool score of `word`, if it is a legal guess
    #[must_use]
    pub fn score_of(&self, word: &Word) -> Option<u32> {
        self.guess_pool
            .iter()
            .find(|candidate| candidate.word == *word)
            .map(|candidate| candidate.score)
    }

    /// Whether `word` is still a possible answer
    #[must_use]
    pub fn contains_answer(&self, word: &Word) -> bool {
        self.answer_pool.iter().any(|candidate| candidate.word == *word)
    }

    /// Remaining answers, best first
    #[must_use]
    pub fn answers(&self) -> &[CandidateWord] {
        &self.answer_pool
    }

    /// Remaining legal guesses, best first
    #[must_use]
    pub fn guesses(&self) -> &[CandidateWord] {
        &self.guess_pool
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answer_pool.len()
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guess_pool.len()
    }

    /// Per-slot letters seen in the answer corpus when the store was built
    #[must_use]
    pub const fn position_mask(&self) -> PositionMask {
        self.mask
    }

    #[must_use]
    pub const fn use_intersecting(&self) -> bool {
        self.use_intersecting
    }

    pub const fn set_use_intersecting(&mut self, enabled: bool) {
        self.use_intersecting = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(pool: &[CandidateWord]) -> Vec<&str> {
        pool.iter().map(|c| c.word.text()).collect()
    }

    fn constraints_after(store: &CandidateStore, turns: &[(&str, &str)]) -> ConstraintState {
        let mut state = ConstraintState::with_mask(store.position_mask());
        for (guess, answer) in turns {
            let guess = Word::new(*guess).unwrap();
            let answer = Word::new(*answer).unwrap();
            state.apply_pattern(&guess, Pattern::calculate(&guess, &answer));
        }
        state
    }

    #[test]
    fn pools_sorted_descending_and_stable() {
        // BBBBB and DDDDD score equally and must keep corpus order
        let answers = words(&["bbbbb", "ddddd", "crane", "slate"]);
        let store = CandidateStore::new(&answers, &[], false);

        let scores: Vec<u32> = store.answers().iter().map(|c| c.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        let order = texts(store.answers());
        let b = order.iter().position(|w| *w == "BBBBB").unwrap();
        let d = order.iter().position(|w| *w == "DDDDD").unwrap();
        assert!(b < d);
    }

    #[test]
    fn guess_pool_merges_without_duplicates() {
        let answers = words(&["crane", "slate"]);
        let guesses = words(&["crane", "aeros", "aeros"]);
        let store = CandidateStore::new(&answers, &guesses, false);

        assert_eq!(store.guess_count(), 3);
        assert_eq!(store.answer_count(), 2);
        assert!(store.score_of(&Word::new("slate").unwrap()).is_some());
        assert!(store.score_of(&Word::new("fuzzy").unwrap()).is_none());
    }

    #[test]
    fn rank_of_is_one_based() {
        let answers = words(&["crane", "slate", "fuzzy"]);
        let store = CandidateStore::new(&answers, &[], false);

        let top = store.guesses()[0].word.clone();
        assert_eq!(store.rank_of(&top), Some((1, 3)));
        assert_eq!(store.rank_of(&Word::new("aeros").unwrap()), None);
    }

    #[test]
    fn filter_keeps_consistent_answers_only() {
        let answers = words(&["crane", "crate", "slate", "grape", "fuzzy"]);
        let mut store = CandidateStore::new(&answers, &[], false);

        let state = constraints_after(&store, &[("slate", "crane")]);
        store.filter(&state);

        let mut left = texts(store.answers());
        left.sort_unstable();
        assert_eq!(left, vec!["CRANE", "GRAPE"]);
        // The guess pool is never filtered
        assert_eq!(store.guess_count(), 5);
    }

    #[test]
    fn filter_is_monotonic() {
        let answers = words(&["crane", "crate", "grape", "irate", "brine", "prone"]);
        let mut store = CandidateStore::new(&answers, &[], false);

        let first = constraints_after(&store, &[("stare", "crane")]);
        store.filter(&first);
        let after_one = store.answer_count();

        let second = constraints_after(&store, &[("stare", "crane"), ("brine", "crane")]);
        store.filter(&second);
        assert!(store.answer_count() <= after_one);
        assert!(store.contains_answer(&Word::new("crane").unwrap()));
    }

    #[test]
    fn remove_guessed_drops_from_both_pools() {
        let answers = words(&["crane", "slate"]);
        let mut store = CandidateStore::new(&answers, &words(&["aeros"]), false);

        let crane = Word::new("crane").unwrap();
        store.remove_guessed(&crane);

        assert!(!store.contains_answer(&crane));
        assert!(store.rank_of(&crane).is_none());
        assert_eq!(store.guess_count(), 2);
    }

    #[test]
    fn next_guess_without_intersecting_is_top_answer() {
        let answers = words(&["fuzzy", "crane", "slate"]);
        let store = CandidateStore::new(&answers, &[], false);

        assert_eq!(store.next_guess(&[]), Some(store.answers()[0].word.clone()));
    }

    #[test]
    fn next_guess_on_empty_pools() {
        let store = CandidateStore::new(&[], &[], true);
        assert_eq!(store.next_guess(&[]), None);
    }

    #[test]
    fn intersecting_guess_cuts_through_shared_letters() {
        // After SLATE and CRONY against HOUND these answers remain
        let answers = words(&[
            "bound", "pound", "found", "doing", "mound", "going", "wound", "hound", "owing",
        ]);
        let guesses = words(&["humid", "slate", "crony", "zzzzz"]);
        let store = CandidateStore::new(&answers, &guesses, true);

        let history = words(&["slate", "crony"]);
        assert_eq!(
            store.intersecting_guess(&history),
            Some(Word::new("humid").unwrap())
        );
    }

    #[test]
    fn intersecting_guess_respects_window() {
        let answers = words(&["bound", "pound"]);
        let store = CandidateStore::new(&answers, &words(&["humid"]), true);
        assert_eq!(store.intersecting_guess(&[]), None);

        let answers = words(&["bound", "pound", "found"]);
        let disabled = CandidateStore::new(&answers, &words(&["bpfxx"]), false);
        assert_eq!(disabled.intersecting_guess(&[]), None);
    }

    #[test]
    fn intersecting_guess_needs_coverage() {
        let answers = words(&["bound", "pound", "found"]);
        // Every letter of every answer has been played
        let history = words(&["bound", "pfzzz"]);
        let store = CandidateStore::new(&answers, &words(&["humid"]), true);
        assert_eq!(store.intersecting_guess(&history), None);
        assert_eq!(
            store.next_guess(&history),
            Some(store.answers()[0].word.clone())
        );
    }

    #[test]
    fn intersecting_ties_prefer_positional_score_then_pool_order() {
        let answers = words(&["baaaa", "caaaa", "daaaa"]);
        // Both probes cover B and C once each after A is used
        let guesses = words(&["xbcxx", "bcxxx"]);
        let store = CandidateStore::new(&answers, &guesses, true);

        let history = words(&["aaaaa"]);

        // BCXXX has B at slot 0 where the corpus has it
        assert_eq!(
            store.intersecting_guess(&history),
            Some(Word::new("bcxxx").unwrap())
        );
    }
}
