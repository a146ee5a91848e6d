use appraiser::{format_usd, group_thousands};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::{form::Outcome, number::NumberInput};

use super::theme::Theme;

fn field_block(label: &str, focused: bool) -> Block<'static> {
    let (border, title) = if focused {
        (Theme::focus(), Theme::accent())
    } else {
        (Theme::border(), Theme::dim())
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(format!(" {label} "), title))
}

fn cursor(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("█", Theme::accent())
    } else {
        Span::raw("")
    }
}

/// A typed number followed by its unit, e.g. `60 m²`.
pub fn number(label: &str, input: &NumberInput, unit: &str, focused: bool) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(input.display(), Theme::text()),
        cursor(focused),
        Span::styled(format!(" {unit}"), Theme::muted()),
    ]);

    Paragraph::new(line).block(field_block(label, focused))
}

/// A typed amount of pesos, grouped in thousands unless it is being edited.
pub fn money(label: &str, input: &NumberInput, focused: bool) -> Paragraph<'static> {
    let shown = if input.is_editing() {
        input.display()
    } else {
        group_thousands(input.value() as f64)
    };

    let line = Line::from(vec![
        Span::styled("$ ", Theme::muted()),
        Span::styled(shown, Theme::text()),
        cursor(focused),
    ]);

    Paragraph::new(line).block(field_block(label, focused))
}

/// A bounded value drawn as `◀ 3 ▶ ■■■····`.
pub fn slider(label: &str, input: &NumberInput, focused: bool) -> Paragraph<'static> {
    let (min, max) = input.range().into_inner();
    let filled = (input.value() - min + 1) as usize;
    let empty = (max - input.value()) as usize;

    let arrows = if focused { Theme::accent() } else { Theme::muted() };
    let line = Line::from(vec![
        Span::styled("◀ ", arrows),
        Span::styled(input.value().to_string(), Theme::title()),
        Span::styled(" ▶  ", arrows),
        Span::styled("■".repeat(filled), Theme::accent()),
        Span::styled("·".repeat(empty), Theme::muted()),
    ]);

    Paragraph::new(line).block(field_block(label, focused))
}

/// A yes/no choice drawn as two radio buttons.
pub fn radio(label: &str, value: bool, focused: bool) -> Paragraph<'static> {
    let option = |text: &'static str, selected: bool| {
        let (mark, style) = if selected {
            ("(•) ", Theme::title())
        } else {
            ("( ) ", Theme::dim())
        };
        Span::styled(format!("{mark}{text}"), style)
    };

    let line = Line::from(vec![
        option("No", !value),
        Span::raw("    "),
        option("Sí", value),
    ]);

    Paragraph::new(line).block(field_block(label, focused))
}

/// One option out of a list, with its position.
pub fn select(label: &str, options: &[&str], selected: usize, focused: bool) -> Paragraph<'static> {
    let arrows = if focused { Theme::accent() } else { Theme::muted() };
    let name = options.get(selected).copied().unwrap_or_default();

    let line = Line::from(vec![
        Span::styled("◀ ", arrows),
        Span::styled(name.to_string(), Theme::title()),
        Span::styled(" ▶", arrows),
        Span::styled(
            format!("  ({}/{})", selected + 1, options.len()),
            Theme::muted(),
        ),
    ]);

    Paragraph::new(line).block(field_block(label, focused))
}

pub fn submit_button(focused: bool) -> Paragraph<'static> {
    let (style, border) = if focused {
        (Theme::button_active(), Theme::focus())
    } else {
        (Theme::accent(), Theme::border())
    };

    Paragraph::new(Span::styled(" Calcular tasación ", style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border))
}

/// The outcome of the last submission, or a prompt if there is none yet.
pub fn result(outcome: Option<&Outcome>) -> Paragraph<'static> {
    let block = Block::default().borders(Borders::ALL);

    match outcome {
        None => Paragraph::new(Span::styled(
            "Completá el formulario y presioná enter para tasar.",
            Theme::muted(),
        ))
        .block(block.border_style(Theme::border()).title(" Resultado ")),

        Some(Outcome::Success(a)) => {
            let lines = vec![
                Line::from(vec![
                    Span::styled("Precio estimado de venta   ", Theme::dim()),
                    Span::styled(format_usd(a.price_usd), Theme::ok()),
                ]),
                Line::from(vec![
                    Span::styled("Valor por m²               ", Theme::dim()),
                    Span::styled(format_usd(a.price_per_m2), Theme::ok()),
                ]),
                Line::from(""),
                Line::from(Span::styled(
                    "Nota: es una estimación de un modelo entrenado con avisos de Inmuebles Clarín.",
                    Theme::warn(),
                )),
            ];

            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(
                    block
                        .border_style(Theme::ok())
                        .title(Span::styled(" ✔ Tasación generada ", Theme::ok())),
                )
        }

        Some(Outcome::Failure(msg)) => Paragraph::new(Line::from(vec![
            Span::styled("Ocurrió un error al calcular: ", Theme::error()),
            Span::styled(msg.clone(), Theme::text()),
        ]))
        .wrap(Wrap { trim: true })
        .block(
            block
                .border_style(Theme::error())
                .title(Span::styled(" ✖ Error ", Theme::error())),
        ),
    }
}

/// A single centered line of `key  action` pairs.
pub fn hints(pairs: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let spans = pairs
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Theme::dim()),
                Span::styled(format!(" {action}    "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
