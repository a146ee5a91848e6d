use std::path::Path;

use appraiser::{config::BUNDLE_ENV, BundleError};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{layout::centered_rect, theme::Theme, widgets};

/// A session that cannot continue. Only shows why and waits for a key to exit.
pub struct FatalState {
    pub title: String,
    pub reason: String,
}

impl FatalState {
    pub fn missing_bundle(path: &Path) -> Self {
        Self {
            title: "Error crítico: no se encuentra el archivo del modelo".into(),
            reason: format!(
                "Verificá que exista '{}'. Podés indicar otra ruta con {BUNDLE_ENV} o como primer argumento.",
                path.display()
            ),
        }
    }

    pub fn broken_bundle(e: &BundleError) -> Self {
        Self {
            title: "Error crítico: no se pudo cargar el modelo".into(),
            reason: e.to_string(),
        }
    }

    pub fn no_neighborhoods() -> Self {
        Self {
            title: "No se pudieron cargar los barrios del modelo".into(),
            reason: "El modelo no tiene ninguna columna barrio_*.".into(),
        }
    }
}

pub fn draw(f: &mut Frame, state: &FatalState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = centered_rect(64, 50, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Min(4),    // reason
            Constraint::Length(1), // spacer
            Constraint::Length(1), // hint
        ])
        .split(outer);

    f.render_widget(
        Paragraph::new(Span::styled(
            state.title.as_str(),
            Theme::error().add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true }),
        chunks[0],
    );

    f.render_widget(
        Paragraph::new(state.reason.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::error())
                    .title(" Motivo ")
                    .title_style(Theme::error()),
            )
            .style(Theme::text())
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    f.render_widget(widgets::hints(&[("cualquier tecla", "salir")]), chunks[3]);
}
