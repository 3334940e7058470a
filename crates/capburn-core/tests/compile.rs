//! End-to-end compilation scenarios through the public API

use capburn_core::filter::{assemble, drawtext_chain};
use capburn_core::{compile, CompiledOverlay, Cue, StyleOptions, WordTiming};

fn opts_with_animation(name: &str) -> StyleOptions {
    StyleOptions {
        animation: name.to_string(),
        ..StyleOptions::default()
    }
}

#[test]
fn static_render_produces_a_single_timed_entry() {
    let cues = vec![Cue::new("Hello World", 0.0, 2.5)];
    let CompiledOverlay::Document(doc) = compile(&cues, &StyleOptions::default()) else {
        panic!("static path must produce a document");
    };
    let dialogues: Vec<&str> = doc.lines().filter(|l| l.starts_with("Dialogue:")).collect();
    assert_eq!(dialogues.len(), 1);
    assert!(dialogues[0].contains("0:00:00.00,0:00:02.50"));
    assert!(dialogues[0].ends_with("Hello World"));
}

#[test]
fn fade_in_produces_one_windowed_command_with_an_opacity_ramp() {
    let cues = vec![Cue::new("Hello World", 0.0, 2.5)];
    let CompiledOverlay::Commands(cmds) = compile(&cues, &opts_with_animation("fade-in")) else {
        panic!("animated path must produce commands");
    };
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].enable, "between(t,0,2.5)");
    // alpha is 0 at t=0 and saturates at 1 from t=0.5
    assert_eq!(cmds[0].alpha.as_deref(), Some("min(t/0.5,1)"));
}

#[test]
fn word_reveal_windows_follow_the_synthesis_formula() {
    let cues = vec![Cue::new("a b c d", 10.0, 14.0)];
    let CompiledOverlay::Commands(cmds) = compile(&cues, &opts_with_animation("word-reveal"))
    else {
        panic!("animated path must produce commands");
    };
    assert_eq!(cmds.len(), 4);
    // buffer = 4 * 0.05 = 0.2, per-word = 3.6 / 4 = 0.9, so "c" opens at
    // 10 + 0.2 + 2 * 0.9 = 12 and every window closes at the cue end
    assert_eq!(cmds[2].text, "c");
    assert_eq!(cmds[2].enable, "between(t,12,14)");
    for cmd in &cmds {
        assert!(cmd.enable.ends_with(",14)"));
    }
}

#[test]
fn empty_cue_produces_no_commands_for_any_per_word_animation() {
    let cues = vec![Cue::new("   ", 0.0, 1.0)];
    for name in ["word-reveal", "word-color", "word-fill", "word-highlight", "stroke"] {
        let CompiledOverlay::Commands(cmds) = compile(&cues, &opts_with_animation(name)) else {
            panic!("{name} must take the animated path");
        };
        assert!(cmds.is_empty(), "{name} emitted commands for an empty cue");
    }
}

#[test]
fn typewriter_compiles_sub_second_cues() {
    let cues = vec![Cue::new("Hi", 0.0, 0.5)];
    let CompiledOverlay::Commands(cmds) = compile(&cues, &opts_with_animation("typewriter"))
    else {
        panic!("animated path must produce commands");
    };
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].alpha.as_deref(), Some("min(t/0.4,1)"));
}

#[test]
fn compilation_is_deterministic_across_paths() {
    let cues = vec![
        Cue::new("one two three", 0.0, 2.0),
        Cue::new("four five", 2.0, 4.0),
    ];
    let static_opts = StyleOptions::default();
    assert_eq!(compile(&cues, &static_opts), compile(&cues, &static_opts));
    let animated = opts_with_animation("word-highlight");
    assert_eq!(compile(&cues, &animated), compile(&cues, &animated));
}

#[test]
fn cue_text_is_escaped_in_the_assembled_graph() {
    let cues = vec![Cue::new("it's 100%: go [now]", 0.0, 2.0)];
    let overlay = compile(&cues, &opts_with_animation("fade-in"));
    let graph = assemble(&overlay, "");
    assert!(graph.contains("it'\\''s 100\\%\\: go \\[now\\]"));
    assert!(graph.contains("\\%"));
    assert!(graph.contains("\\:"));
    assert!(graph.contains("\\["));
}

#[test]
fn external_word_timings_override_synthesis_end_to_end() {
    let cues = vec![Cue {
        words: Some(vec![
            WordTiming {
                word: String::from("Hello"),
                start: 0.3,
                end: 0.6,
            },
            WordTiming {
                word: String::from("World"),
                start: 0.6,
                end: 1.0,
            },
        ]),
        ..Cue::new("Hello World", 0.0, 1.0)
    }];
    let CompiledOverlay::Commands(cmds) = compile(&cues, &opts_with_animation("word-reveal"))
    else {
        panic!("animated path must produce commands");
    };
    assert_eq!(cmds[0].enable, "between(t,0.3,1)");
    assert_eq!(cmds[1].enable, "between(t,0.6,1)");
}

#[test]
fn multi_cue_animated_graph_keeps_cue_order() {
    let cues = vec![Cue::new("alpha", 0.0, 1.0), Cue::new("beta", 1.0, 2.0)];
    let CompiledOverlay::Commands(cmds) = compile(&cues, &opts_with_animation("glitch")) else {
        panic!("animated path must produce commands");
    };
    // five layers per cue, later cue draws on top
    assert_eq!(cmds.len(), 10);
    let graph = drawtext_chain(&cmds);
    assert!(graph.rfind("text='alpha'").unwrap() < graph.find("text='beta'").unwrap());
}
