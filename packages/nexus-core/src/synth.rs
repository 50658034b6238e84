//! Template reply synthesizer.
//!
//! Replies are stitched from fixed Spanish carrier sentences and fragments of
//! the prompt. There is no language model here; the only relationship between
//! prompt and reply is surface token reuse.

use crate::source::RandomSource;

/// Longest normalized prompt, in characters.
pub const MAX_PROMPT_CHARS: usize = 140;

/// At most this many prompt tokens become fragments.
pub const MAX_FRAGMENTS: usize = 6;

/// Tokens longer than this get the glitch abbreviation.
const GLITCH_THRESHOLD: usize = 6;

const GLITCH_SEPARATOR: char = '·';

/// Closing phrases; also the whole reply for a blank prompt.
pub const SEED_PHRASES: [&str; 5] = [
    "Proyectemos un relato donde tus palabras generen ecos cromáticos que envolvieron a la audiencia.",
    "Diseñemos patrones sonoros que caen como meteoros suaves sobre la percepción colectiva.",
    "Imagina cápsulas de aroma inteligente sincronizadas con micromovimientos de luz.",
    "Podemos cultivar avatares líquidos que se fragmentan en partículas de ideas cuando los tocas.",
    "Activemos un pergamino de datos que se pliega siguiendo la emoción dominante en la sala.",
];

/// Words used in place of missing fragments, one per hybrid sentence.
const DEFAULT_FRAGMENTS: [&str; 3] = ["ideas", "impulsos", "emociones"];

/// Trim, collapse whitespace runs, cap at [`MAX_PROMPT_CHARS`] and lowercase.
pub fn normalize(prompt: &str) -> String {
    let collapsed = prompt.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(MAX_PROMPT_CHARS).collect();
    // Truncation can leave a trailing space behind
    truncated.trim_end().to_lowercase()
}

/// Abbreviate long tokens as `abcd·ef`, keeping a couple more characters
/// depending on the token position.
pub fn glitch(token: &str, index: usize) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= GLITCH_THRESHOLD {
        return token.to_string();
    }

    let tail_end = (6 + index % 3).min(chars.len());
    let mut out: String = chars[..4].iter().collect();
    out.push(GLITCH_SEPARATOR);
    out.extend(&chars[4..tail_end]);
    out
}

/// The processed fragments of an already normalized prompt.
pub fn fragments(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .take(MAX_FRAGMENTS)
        .enumerate()
        .map(|(index, token)| glitch(token, index))
        .collect()
}

/// The three candidate sentences for a set of fragments.
pub fn hybrids(fragments: &[String]) -> [String; 3] {
    let fragment = |i: usize| {
        fragments
            .get(i)
            .map(String::as_str)
            .unwrap_or(DEFAULT_FRAGMENTS[i])
    };

    [
        format!(
            "Entretejamos {} con partículas lumínicas que respondan a tus gestos.",
            fragment(0)
        ),
        format!(
            "Amplifiquemos {} con ondas sónicas que abracen las paredes del espacio.",
            fragment(1)
        ),
        format!(
            "Sincronizaremos {} con nubes cinéticas que respiran contigo.",
            fragment(2)
        ),
    ]
}

/// Produce a reply for `prompt`.
///
/// A blank prompt yields one seed phrase. Otherwise the reply is one hybrid
/// sentence followed by one seed phrase. The seed phrase is drawn first.
pub fn synthesize(prompt: &str, rng: &mut impl RandomSource) -> String {
    let catalyst = normalize(prompt);
    let seed = SEED_PHRASES[rng.pick(SEED_PHRASES.len())];

    if catalyst.is_empty() {
        return seed.to_string();
    }

    let candidates = hybrids(&fragments(&catalyst));
    let hybrid = &candidates[rng.pick(candidates.len())];

    format!("{hybrid} {seed}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ScriptedRandom, StdRandom};

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Hola \t\n  MUNDO  "), "hola mundo");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(&"a".repeat(200)).chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn test_normalize_counts_chars_not_bytes() {
        let prompt = "ñ".repeat(150);
        let normalized = normalize(&prompt);
        assert_eq!(normalized.chars().count(), MAX_PROMPT_CHARS);
    }

    #[test]
    fn test_glitch_short_tokens_untouched() {
        assert_eq!(glitch("corto", 0), "corto");
        assert_eq!(glitch("seisch", 1), "seisch");
    }

    #[test]
    fn test_glitch_long_tokens() {
        // index 0: chars 4..6
        assert_eq!(glitch("experiencia", 0), "expe·ri");
        // index 1: chars 4..7
        assert_eq!(glitch("experiencia", 1), "expe·rie");
        // index 2: chars 4..8
        assert_eq!(glitch("experiencia", 2), "expe·rien");
        // index 3 wraps back to 4..6
        assert_eq!(glitch("experiencia", 3), "expe·ri");
    }

    #[test]
    fn test_glitch_clamps_to_token_length() {
        // 7 chars, index 2 would want up to 8
        assert_eq!(glitch("galaxia", 2), "gala·xia");
    }

    #[test]
    fn test_glitch_multibyte() {
        assert_eq!(glitch("sintéticas", 0), "sint·ét");
    }

    #[test]
    fn test_fragments_limit() {
        let frags = fragments("uno dos tres cuatro cinco seis siete ocho");
        assert_eq!(frags.len(), MAX_FRAGMENTS);
        assert_eq!(frags[0], "uno");
        assert_eq!(frags[5], "seis");
    }

    #[test]
    fn test_hybrids_use_defaults() {
        let h = hybrids(&["hola".to_string()]);
        assert!(h[0].contains("Entretejamos hola con"));
        assert!(h[1].contains("Amplifiquemos impulsos con"));
        assert!(h[2].contains("Sincronizaremos emociones con"));
    }

    #[test]
    fn test_synthesize_empty_returns_seed_phrase() {
        let mut rng = StdRandom::from_entropy();
        for _ in 0..20 {
            let reply = synthesize("", &mut rng);
            assert!(SEED_PHRASES.contains(&reply.as_str()));
        }
        let reply = synthesize(" \t ", &mut rng);
        assert!(SEED_PHRASES.contains(&reply.as_str()));
    }

    #[test]
    fn test_synthesize_scripted() {
        // seed phrase index 1, hybrid index 0
        let mut rng = ScriptedRandom::new([0.2, 0.1]);
        let reply = synthesize("Hola mundo", &mut rng);
        assert_eq!(
            reply,
            format!(
                "Entretejamos hola con partículas lumínicas que respondan a tus gestos. {}",
                SEED_PHRASES[1]
            )
        );
    }

    #[test]
    fn test_synthesize_uses_second_fragment() {
        let mut rng = ScriptedRandom::new([0.0, 0.5]);
        let reply = synthesize("quiero experiencias", &mut rng);
        assert!(reply.starts_with("Amplifiquemos expe·rie con ondas sónicas"));
        assert!(reply.ends_with(SEED_PHRASES[0]));
    }

    #[test]
    fn test_synthesize_non_empty_structure() {
        let mut rng = StdRandom::seeded(9);
        for prompt in ["hola", "a b c d e f g", "luz líquida y sonido binaural", "x"] {
            let reply = synthesize(prompt, &mut rng);
            assert!(!reply.is_empty());
            assert!(
                reply.starts_with("Entretejamos")
                    || reply.starts_with("Amplifiquemos")
                    || reply.starts_with("Sincronizaremos")
            );
            assert!(SEED_PHRASES.iter().any(|seed| reply.ends_with(seed)));
        }
    }
}
