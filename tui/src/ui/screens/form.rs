use crossterm::event::KeyCode;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, Paragraph, Wrap,
    },
    Frame,
};

use crate::state::form::{Field, FormState};
use crate::ui::{layout, theme::Theme, widgets};

use super::Action;

const ABOUT: &[&str] = &[
    "Tasador de departamentos ubicados en CABA.",
    "",
    "Pipeline del proyecto:",
    "  1. Web scraping de avisos de Inmuebles Clarín.",
    "  2. Limpieza y ETL: nulos, duplicados y estandarización.",
    "  3. Análisis exploratorio del mercado inmobiliario de CABA.",
    "  4. Entrenamiento y ajuste de un modelo Random Forest.",
    "  5. Esta interfaz, que carga el modelo y tasa una propiedad.",
    "",
    "Expensas altas suelen indicar edificios con seguridad o amenities.",
];

pub fn handle_key(state: &mut FormState, key: KeyCode) -> Action {
    if state.show_about {
        state.toggle_about();
        return Action::None;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        KeyCode::Char('?') => state.toggle_about(),
        KeyCode::Down | KeyCode::Tab => state.focus_next(),
        KeyCode::Up | KeyCode::BackTab => state.focus_prev(),
        KeyCode::Right | KeyCode::Char('+') => state.increase(),
        KeyCode::Left | KeyCode::Char('-') => state.decrease(),
        KeyCode::Char(' ') => state.toggle_parking(),
        KeyCode::Char(c) if c.is_ascii_digit() => state.type_digit(c),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Enter => state.submit(),
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &FormState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let areas = layout::form(area);
    let focused = |field: Field| state.focus == field;

    f.render_widget(header(), areas.header);

    f.render_widget(
        widgets::number("Superficie cubierta", &state.area, "m²", focused(Field::Area)),
        areas.left[0],
    );
    f.render_widget(
        widgets::slider("Ambientes", &state.rooms, focused(Field::Rooms)),
        areas.left[1],
    );
    f.render_widget(
        widgets::slider("Baños", &state.baths, focused(Field::Baths)),
        areas.left[2],
    );
    f.render_widget(
        widgets::radio("¿Posee cochera?", state.parking, focused(Field::Parking)),
        areas.right[0],
    );
    f.render_widget(
        widgets::money("Expensas (ARS)", &state.fee, focused(Field::Fee)),
        areas.right[1],
    );
    f.render_widget(
        widgets::select(
            "Barrio",
            state.neighborhoods(),
            state.neighborhood_index(),
            focused(Field::Neighborhood),
        ),
        areas.right[2],
    );

    f.render_widget(widgets::submit_button(focused(Field::Submit)), areas.button);
    f.render_widget(widgets::result(state.outcome.as_ref()), areas.result);

    let typing = if state.focus.is_typed() {
        ("0-9", "escribir")
    } else {
        ("espacio", "elegir")
    };
    f.render_widget(
        widgets::hints(&[
            ("↑↓", "campo"),
            ("←→", "ajustar"),
            typing,
            ("enter", "calcular"),
            ("?", "acerca de"),
            ("q", "salir"),
        ]),
        areas.hints,
    );

    if state.show_about {
        draw_about(f);
    }
}

fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Tasador de departamentos ubicados en CABA",
            Theme::title(),
        )),
        Line::from(Span::styled(
            "Estima el valor de venta con un modelo Random Forest entrenado con datos reales del mercado.",
            Theme::dim(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}

fn draw_about(f: &mut Frame) {
    let area = layout::centered_rect(64, 60, f.size());
    let lines = ABOUT
        .iter()
        .map(|l| Line::from(Span::styled(*l, Theme::text())))
        .collect::<Vec<_>>();

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .style(Theme::base())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::focus())
                    .title(Span::styled(" Acerca de ", Theme::accent()))
                    .title(
                        Title::from(Span::styled(" cualquier tecla para volver ", Theme::muted()))
                            .position(Position::Bottom),
                    ),
            ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use appraiser::{
        estimator::{Estimator, LinearRegressor},
        ModelBundle,
    };

    use super::*;
    use crate::state::form::Outcome;

    fn bundle() -> ModelBundle {
        let columns = [
            "sup_cubierta",
            "ambientes",
            "baños",
            "dormitorios",
            "cocheras",
            "precio_expensas",
            "barrio_Palermo",
        ];
        let mut coefficients = vec![0.0; columns.len()];
        coefficients[0] = 1_000.0;

        ModelBundle::new(
            Estimator::Linear(LinearRegressor::new(0.0, coefficients)),
            columns.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    fn press(state: &mut FormState, keys: &[KeyCode]) {
        for key in keys {
            assert!(matches!(handle_key(state, *key), Action::None));
        }
    }

    #[test]
    fn test_keys_fill_and_submit() {
        let b = bundle();
        let mut state = FormState::new(&b).unwrap();

        press(
            &mut state,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('0'),
                KeyCode::Char('0'),
                KeyCode::Down,
                KeyCode::Right,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Char(' '),
                KeyCode::Enter,
            ],
        );

        let input = state.input();
        assert_eq!(input.area_m2, 100);
        assert_eq!(input.rooms, 4);
        assert!(input.parking);
        assert_eq!(
            state.outcome,
            Some(Outcome::Success(appraiser::Appraisal {
                price_usd: 100_000.0,
                price_per_m2: 1_000.0,
            }))
        );
    }

    #[test]
    fn test_about_swallows_next_key() {
        let b = bundle();
        let mut state = FormState::new(&b).unwrap();

        press(&mut state, &[KeyCode::Char('?')]);
        assert!(state.show_about);

        press(&mut state, &[KeyCode::Char('q')]);
        assert!(!state.show_about);

        assert!(matches!(handle_key(&mut state, KeyCode::Char('q')), Action::Quit));
    }
}
