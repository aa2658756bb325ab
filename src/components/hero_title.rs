//! Hero text split into individually animated letters.

use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub delay_s: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Piece {
    Word(Vec<Glyph>),
    /// Space between two words; it animates like a letter.
    Space(f64),
}

fn delay(base: f64, step: f64, index: usize) -> f64 {
    let raw = base + index as f64 * step;
    (raw * 1000.0).round() / 1000.0
}

/// Splits each line into words and letters. The letter index, and so the
/// delay, keeps counting across lines.
pub fn letterize(lines: &[AttrValue], base: f64, step: f64) -> Vec<Vec<Piece>> {
    let mut index = 0;
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        let mut pieces = Vec::new();
        for (w, word) in line.split_whitespace().enumerate() {
            if w > 0 {
                pieces.push(Piece::Space(delay(base, step, index)));
                index += 1;
            }
            let mut glyphs = Vec::with_capacity(word.len());
            for ch in word.chars() {
                glyphs.push(Glyph {
                    ch,
                    delay_s: delay(base, step, index),
                });
                index += 1;
            }
            pieces.push(Piece::Word(glyphs));
        }
        out.push(pieces);
    }
    out
}

fn delay_style(delay_s: f64) -> String {
    format!("animation-delay: {}s", delay_s)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub lines: Vec<AttrValue>,
    #[prop_or_default]
    pub base: f64,
    pub step: f64,
    #[prop_or(AttrValue::Static("p"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let lines = letterize(&props.lines, props.base, props.step);
    let last = lines.len().saturating_sub(1);

    html! {
        <@{props.tag.to_string()} class={props.class.clone()}>
            {
                for lines.into_iter().enumerate().map(|(i, pieces)| html! {
                    <>
                        {
                            for pieces.into_iter().map(|piece| match piece {
                                Piece::Word(glyphs) => html! {
                                    <span class="hero__word">
                                        {
                                            for glyphs.into_iter().map(|g| html! {
                                                <span class="hero__letter" style={delay_style(g.delay_s)}>
                                                    {g.ch.to_string()}
                                                </span>
                                            })
                                        }
                                    </span>
                                },
                                Piece::Space(delay_s) => html! {
                                    <span class="hero__letter hero__letter--space" style={delay_style(delay_s)}>
                                        {"\u{00A0}"}
                                    </span>
                                },
                            })
                        }
                        if i < last {
                            <br />
                        }
                    </>
                })
            }
        </@>
    }
}
