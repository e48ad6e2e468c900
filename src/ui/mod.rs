mod components;

use std::sync::OnceLock;

use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus, Popup, Screen, MENU};
use crate::event::LayoutMap;
use crate::format::{format_date, format_money};
use crate::mask::mask_document;
use crate::sidebar::{Mode, EXPANDED_WIDTH};

// Palette loaded once at startup; theme.conf overrides the defaults
static THEME: OnceLock<crate::theme::Theme> = OnceLock::new();

fn theme() -> &'static crate::theme::Theme {
    THEME.get_or_init(crate::theme::Theme::load)
}

fn accent() -> Color { theme().accent }
fn success() -> Color { theme().success }
fn warning() -> Color { theme().warning }
fn danger() -> Color { theme().danger }
fn text() -> Color { theme().text }
fn text_dim() -> Color { theme().text_dim }
fn bg_selected() -> Color { theme().bg_selected }
fn inactive() -> Color { theme().inactive }
fn header() -> Color { theme().header }

/// Compute where everything goes. The app keeps the result for
/// hit-testing; `draw` recomputes it against the real frame every pass so
/// painting and pointer mapping always agree.
pub fn layout(width: u16, height: u16, app: &App) -> LayoutMap {
    let frame = Rect::new(0, 0, width, height);
    let mut map = LayoutMap {
        frame,
        ..Default::default()
    };

    let (sidebar_area, main_area) = match app.sidebar.mode() {
        Mode::Wide => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(app.sidebar.rail_width().min(width)),
                    Constraint::Min(0),
                ])
                .split(frame);
            (Some(chunks[0]), chunks[1])
        }
        Mode::Narrow => {
            if app.sidebar.shown() {
                // the drawer overlays the content instead of displacing it
                (Some(Rect::new(0, 0, EXPANDED_WIDTH.min(width), height)), frame)
            } else {
                (None, frame)
            }
        }
    };

    map.sidebar = sidebar_area;
    if let Some(rail) = sidebar_area {
        let item_x = rail.x + 1;
        let item_w = rail.width.saturating_sub(2);
        for i in 0..MENU.len() as u16 {
            let y = rail.y + 2 + i;
            if y + 1 < rail.y + rail.height {
                map.menu_items.push(Rect::new(item_x, y, item_w, 1));
            }
        }
    }

    let alert_rows = app.alerts.len().min(3) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // header
            Constraint::Length(alert_rows),
            Constraint::Min(0),         // content
            Constraint::Length(1),      // footer
        ])
        .split(main_area);
    map.header = chunks[0];
    map.alerts = chunks[1];
    map.content = chunks[2];
    map.footer = chunks[3];
    map.toggle = Some(Rect::new(
        map.header.x,
        map.header.y,
        4.min(map.header.width),
        1,
    ));

    match app.screen {
        Screen::Dashboard => map.cards = card_rects(map.content),
        Screen::Clientes => map.rows = row_rects(map.content, app.clientes.len()),
        Screen::Cadastro => {
            let (fields, submit) = form_rects(map.content, app.form.fields.len());
            map.fields = fields;
            map.submit = submit;
        }
        _ => {}
    }

    map
}

fn card_rects(area: Rect) -> Vec<Rect> {
    let area = area.inner(Margin::new(1, 1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let mut rects = Vec::with_capacity(4);
    for row in rows.iter().take(2) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        rects.push(cols[0]);
        rects.push(cols[1]);
    }
    rects
}

fn row_rects(area: Rect, count: usize) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(count);
    let x = area.x + 1;
    let w = area.width.saturating_sub(2);
    for i in 0..count as u16 {
        let y = area.y + 2 + i;
        if y + 1 < area.y + area.height {
            rects.push(Rect::new(x, y, w, 1));
        }
    }
    rects
}

fn form_rects(area: Rect, count: usize) -> (Vec<Rect>, Option<Rect>) {
    let x = area.x + 1;
    let w = area.width.saturating_sub(2).min(48);
    let mut y = area.y + 1;

    let mut fields = Vec::with_capacity(count);
    for _ in 0..count {
        if y + 3 <= area.y + area.height {
            fields.push(Rect::new(x, y, w, 3));
        } else {
            fields.push(Rect::default());
        }
        y += 3;
    }

    let submit = if y + 3 <= area.y + area.height {
        Some(Rect::new(x, y, 22.min(w), 3))
    } else {
        None
    };
    (fields, submit)
}

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let map = layout(area.width, area.height, app);

    match app.sidebar.mode() {
        Mode::Wide => {
            draw_sidebar(f, app, &map);
            draw_main(f, app, &map);
        }
        Mode::Narrow => {
            draw_main(f, app, &map);
            if app.sidebar.shown() {
                components::draw_scrim(f, area);
                draw_sidebar(f, app, &map);
            }
        }
    }

    components::draw_tooltip(f, app);
    components::draw_toasts(f, app);

    match &app.popup {
        Popup::None => {}
        Popup::Help => draw_help_popup(f),
        Popup::Confirm { message, .. } => draw_confirm_popup(f, message),
    }

    components::draw_loading_overlay(f, app);
}

fn draw_sidebar(f: &mut Frame, app: &App, map: &LayoutMap) {
    let Some(area) = map.sidebar else { return };
    let collapsed = app.sidebar.rail_collapsed();
    let is_active = app.focus == Focus::Menu;
    let border_color = if is_active { accent() } else { inactive() };

    if app.sidebar.shown() {
        f.render_widget(Clear, area);
    }

    let title = if collapsed { " 󰢻 " } else { " 󰢻 Painel ERP " };
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(accent()).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    f.render_widget(block, area);

    for (i, item) in MENU.iter().enumerate() {
        let Some(rect) = map.menu_items.get(i).copied() else { break };
        // staggered entrance: the row stays blank until its delay passes
        if !app.menu_entrance.visible(i) {
            continue;
        }

        let selected = i == app.selected_menu;
        let hovered = app.hovered_menu == Some(i);
        let style = if selected {
            Style::default().bg(bg_selected()).fg(accent()).add_modifier(Modifier::BOLD)
        } else if hovered {
            Style::default().fg(text())
        } else {
            Style::default().fg(text_dim())
        };

        let line = if collapsed {
            Line::from(Span::styled(format!(" {} ", item.icon), style))
        } else {
            // the hover nudge the web build did with a translateX
            let lead = if hovered && !selected { "▸" } else { " " };
            Line::from(Span::styled(
                format!("{} {} {}", lead, item.icon, item.label),
                style,
            ))
        };
        f.render_widget(Paragraph::new(line), rect);
    }
}

fn draw_main(f: &mut Frame, app: &App, map: &LayoutMap) {
    draw_header(f, app, map.header);
    draw_alerts(f, app, map.alerts);

    match app.screen {
        Screen::Dashboard => draw_dashboard(f, app, map),
        Screen::Clientes => draw_clientes(f, app, map),
        Screen::Cadastro => draw_form(f, app, map),
        Screen::Fornecedores => draw_fornecedores(f, map.content),
        Screen::ContasPagar => draw_contas_pagar(f, map.content),
        Screen::ContasReceber => draw_contas_receber(f, map.content),
        Screen::Movimentacoes => draw_movimentacoes(f, map.content),
        Screen::Configuracoes => draw_configuracoes(f, app, map.content),
    }

    draw_footer(f, app, map.footer);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let left = Paragraph::new(Line::from(vec![
        Span::styled(" ☰  ", Style::default().fg(accent())),
        Span::styled(
            app.screen_title(),
            Style::default().fg(text()).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(left, area);

    let today = chrono::Local::now().date_naive();
    let right = Paragraph::new(Line::from(Span::styled(
        format!("{} ", format_date(today)),
        Style::default().fg(text_dim()),
    )))
    .alignment(Alignment::Right);
    f.render_widget(right, area);
}

fn draw_alerts(f: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 {
        return;
    }
    let lines: Vec<Line> = app
        .alerts
        .iter()
        .take(area.height as usize)
        .map(|alert| {
            let color = if alert.fading {
                text_dim()
            } else {
                components::level_color(alert.level)
            };
            let mut spans = vec![
                Span::styled(format!(" {} ", components::level_icon(alert.level)), Style::default().fg(color)),
                Span::styled(
                    alert.message.clone(),
                    Style::default().fg(if alert.fading { text_dim() } else { text() }),
                ),
            ];
            if alert.dismissible {
                spans.push(Span::styled("  󰅖 (x)", Style::default().fg(text_dim())));
            }
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_dashboard(f: &mut Frame, app: &App, map: &LayoutMap) {
    let today = chrono::Local::now().date_naive();
    for (i, card) in app.cards.iter().enumerate() {
        let Some(rect) = map.cards.get(i).copied() else { break };
        if rect.height == 0 || !app.cards_entrance.visible(i) {
            continue;
        }

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", card.title),
                Style::default().fg(header()),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(inactive()));
        let body = Paragraph::new(vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(components::level_color(card.tone))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("atualizado em {}", format_date(today)),
                Style::default().fg(text_dim()),
            )),
        ])
        .block(block);
        f.render_widget(body, rect);
    }
}

fn draw_clientes(f: &mut Frame, app: &App, map: &LayoutMap) {
    let area = map.content;
    if area.height < 2 {
        return;
    }

    let head = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), 1);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{:<26} {:<22} {:>14}", "Nome", "CPF/CNPJ", "Limite"),
            Style::default().fg(header()),
        ))),
        head,
    );

    let content_focused = app.focus == Focus::Content;
    for (i, cliente) in app.clientes.iter().enumerate() {
        let Some(rect) = map.rows.get(i).copied() else { break };
        let style = if content_focused && i == app.selected_row {
            Style::default().bg(bg_selected()).fg(text())
        } else {
            Style::default().fg(text())
        };
        let row = format!(
            "{:<26} {:<22} {:>14}",
            cliente.nome, cliente.documento, cliente.limite
        );
        f.render_widget(Paragraph::new(Line::styled(row, style)), rect);
    }

    if app.clientes.is_empty() {
        let empty = Rect::new(area.x + 1, area.y + 2, area.width.saturating_sub(2), 1);
        if empty.y < area.y + area.height {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "Nenhum cliente cadastrado — pressione 'n'",
                    Style::default().fg(text_dim()),
                )),
                empty,
            );
        }
    }
}

fn draw_form(f: &mut Frame, app: &App, map: &LayoutMap) {
    for (i, field) in app.form.fields.iter().enumerate() {
        let Some(rect) = map.fields.get(i).copied() else { break };
        if rect.height == 0 {
            continue;
        }
        let focused = app.form.focused == i;
        let border = if focused { accent() } else { inactive() };
        let cursor = if focused { "_" } else { "" };
        let input = Paragraph::new(format!("{}{}", field.input.value(), cursor))
            .style(Style::default().fg(text()))
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", field.label),
                        Style::default().fg(if focused { accent() } else { header() }),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(input, rect);
    }

    let Some(rect) = map.submit else { return };
    let on_submit = app.form.on_submit_control();
    let (label, label_style) = if app.form.submitting {
        (
            format!("{} Processando...", components::spinner(app.spinner_frame)),
            Style::default().fg(text_dim()),
        )
    } else {
        (
            " Salvar ".to_string(),
            Style::default().fg(success()).add_modifier(Modifier::BOLD),
        )
    };
    let border = if app.form.submitting {
        inactive()
    } else if on_submit {
        accent()
    } else {
        inactive()
    };
    let button = Paragraph::new(Line::from(Span::styled(label, label_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(button, rect);
}

fn draw_fornecedores(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{:<30} {:<22}", "Fornecedor", "CNPJ"),
            Style::default().fg(header()),
        )),
        Line::from(""),
        fixture_line("Distribuidora Sul Ltda", &mask_document("45987654000132")),
        fixture_line("Gráfica Horizonte", &mask_document("23456789000110")),
        fixture_line("TransLog Fretes", &mask_document("67890123000155")),
    ];
    draw_plain_list(f, area, lines);
}

fn draw_contas_pagar(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{:<28} {:>14}  {}", "Descrição", "Valor", "Vencimento"),
            Style::default().fg(header()),
        )),
        Line::from(""),
        due_line("Aluguel do galpão", 350_000, NaiveDate::from_ymd_opt(2026, 8, 15).unwrap_or_default()),
        due_line("Energia elétrica", 84_290, NaiveDate::from_ymd_opt(2026, 8, 20).unwrap_or_default()),
        due_line("Fornecedor — papelaria", 45_900, NaiveDate::from_ymd_opt(2026, 9, 1).unwrap_or_default()),
    ];
    draw_plain_list(f, area, lines);
}

fn draw_contas_receber(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{:<28} {:>14}  {}", "Cliente", "Valor", "Vencimento"),
            Style::default().fg(header()),
        )),
        Line::from(""),
        due_line("Maria Oliveira", 120_000, NaiveDate::from_ymd_opt(2026, 8, 12).unwrap_or_default()),
        due_line("Comercial Andrade Ltda", 980_050, NaiveDate::from_ymd_opt(2026, 8, 28).unwrap_or_default()),
    ];
    draw_plain_list(f, area, lines);
}

fn draw_movimentacoes(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{:<12} {:<12} {:>14}", "Data", "Tipo", "Valor"),
            Style::default().fg(header()),
        )),
        Line::from(""),
        movement_line(NaiveDate::from_ymd_opt(2026, 8, 5).unwrap_or_default(), "Recebimento", 120_000, true),
        movement_line(NaiveDate::from_ymd_opt(2026, 8, 4).unwrap_or_default(), "Pagamento", 84_290, false),
        movement_line(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap_or_default(), "Recebimento", 250_000, true),
    ];
    draw_plain_list(f, area, lines);
}

fn draw_configuracoes(f: &mut Frame, app: &App, area: Rect) {
    let marker = if app.focus == Focus::Content { "▸" } else { " " };
    let lines = vec![
        Line::from(Span::styled("Preferências da interface", Style::default().fg(header()))),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Sidebar recolhida: ", Style::default().fg(text())),
            Span::styled(
                if app.config.sidebar_collapsed { "sim" } else { "não" },
                Style::default().fg(accent()),
            ),
            Span::styled("  ('b' alterna)", Style::default().fg(text_dim())),
        ]),
        Line::from(vec![
            Span::styled(format!("{} Notificações: ", marker), Style::default().fg(text())),
            Span::styled(
                if app.config.notifications { "ativadas" } else { "desativadas" },
                Style::default().fg(accent()),
            ),
            Span::styled("  (Espaço alterna)", Style::default().fg(text_dim())),
        ]),
    ];
    draw_plain_list(f, area, lines);
}

fn draw_plain_list(f: &mut Frame, area: Rect, lines: Vec<Line>) {
    let area = area.inner(Margin::new(1, 0));
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn fixture_line(name: &str, document: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{:<30} {:<22}", name, document),
        Style::default().fg(text()),
    ))
}

fn due_line(description: &str, cents: i64, due: NaiveDate) -> Line<'static> {
    Line::from(Span::styled(
        format!("{:<28} {:>14}  {}", description, format_money(cents), format_date(due)),
        Style::default().fg(text()),
    ))
}

fn movement_line(date: NaiveDate, kind: &str, cents: i64, inbound: bool) -> Line<'static> {
    let sign = if inbound { "+" } else { "-" };
    let color = if inbound { success() } else { danger() };
    Line::from(vec![
        Span::styled(
            format!("{:<12} {:<12} ", format_date(date), kind),
            Style::default().fg(text()),
        ),
        Span::styled(
            format!("{:>13}", format!("{}{}", sign, format_money(cents))),
            Style::default().fg(color),
        ),
    ])
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints: Vec<(&str, &str)> = match app.screen {
        Screen::Cadastro => vec![
            ("Tab", "Campo"),
            ("Enter", "Avançar"),
            ("Esc", "Cancelar"),
        ],
        Screen::Clientes => vec![
            ("↑↓", "Nav"),
            ("n", "Novo"),
            ("d", "Excluir"),
            ("b", "Sidebar"),
            ("?", "Ajuda"),
        ],
        Screen::Configuracoes => vec![
            ("Espaço", "Alternar"),
            ("b", "Sidebar"),
            ("?", "Ajuda"),
        ],
        _ => vec![
            ("↑↓", "Nav"),
            ("Enter", "Abrir"),
            ("b", "Sidebar"),
            ("R", "Atualizar"),
            ("x", "Fechar aviso"),
            ("?", "Ajuda"),
        ],
    };

    let max_hints = if area.width < 60 { 3 } else { hints.len() };
    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(accent())),
                Span::styled(format!(" {} │ ", action), Style::default().fg(text_dim())),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_help_popup(f: &mut Frame) {
    let popup_area = components::centered_rect(60, 70, f.area());
    f.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled("═══ Navegação ═══", Style::default().fg(header()).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("  ↑/↓ j/k   ", Style::default().fg(accent())),
            Span::raw("Mover seleção"),
        ]),
        Line::from(vec![
            Span::styled("  Tab       ", Style::default().fg(accent())),
            Span::raw("Alternar foco menu/conteúdo"),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", Style::default().fg(accent())),
            Span::raw("Abrir módulo selecionado"),
        ]),
        Line::from(""),
        Line::from(Span::styled("═══ Sidebar ═══", Style::default().fg(header()).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("  b         ", Style::default().fg(accent())),
            Span::raw("Recolher/expandir (ou abrir a gaveta)"),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", Style::default().fg(accent())),
            Span::raw("Fechar a gaveta em telas estreitas"),
        ]),
        Line::from(""),
        Line::from(Span::styled("═══ Clientes ═══", Style::default().fg(header()).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("  n         ", Style::default().fg(accent())),
            Span::raw("Novo cliente (CPF/CNPJ e moeda com máscara)"),
        ]),
        Line::from(vec![
            Span::styled("  d         ", Style::default().fg(accent())),
            Span::raw("Excluir com confirmação"),
        ]),
        Line::from(""),
        Line::from(Span::styled("═══ Avisos ═══", Style::default().fg(header()).add_modifier(Modifier::BOLD))),
        Line::from(vec![
            Span::styled("  x         ", Style::default().fg(accent())),
            Span::raw("Fechar o aviso mais recente"),
        ]),
        Line::from(vec![
            Span::styled("  R         ", Style::default().fg(accent())),
            Span::raw("Atualizar os dados (sobreposição de carregamento)"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Pressione ", Style::default().fg(text_dim())),
            Span::styled("?", Style::default().fg(accent())),
            Span::styled("/", Style::default().fg(text_dim())),
            Span::styled("Esc", Style::default().fg(accent())),
            Span::styled(" para fechar", Style::default().fg(text_dim())),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" 󰋖 Ajuda ", Style::default().fg(accent())))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent())),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(help, popup_area);
}

fn draw_confirm_popup(f: &mut Frame, message: &str) {
    let popup_area = components::centered_rect(40, 20, f.area());
    f.render_widget(Clear, popup_area);

    let confirm = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(warning()))),
        Line::from(""),
        Line::from(vec![
            Span::styled("  s", Style::default().fg(success()).add_modifier(Modifier::BOLD)),
            Span::raw(" Sim   "),
            Span::styled("n", Style::default().fg(danger()).add_modifier(Modifier::BOLD)),
            Span::raw(" Não"),
        ]),
    ])
    .block(
        Block::default()
            .title(Span::styled(" Confirmação ", Style::default().fg(warning())))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(warning())),
    )
    .alignment(Alignment::Center);
    f.render_widget(confirm, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
    }

    #[test]
    fn layout_places_the_rail_left_of_the_content() {
        let app = App::new(120, 40, AppConfig::default());
        let map = layout(120, 40, &app);
        let rail = map.sidebar.unwrap();
        assert_eq!(rail.x, 0);
        assert_eq!(map.menu_items.len(), MENU.len());
        assert!(map.content.x >= rail.width);
    }

    #[test]
    fn collapsed_rail_still_exposes_menu_hit_targets() {
        let config = AppConfig {
            sidebar_collapsed: true,
            ..Default::default()
        };
        let app = App::new(120, 40, config);
        let map = layout(120, 40, &app);
        assert_eq!(map.menu_items.len(), MENU.len());
        assert!(map.sidebar.unwrap().width < 10);
    }

    #[test]
    fn narrow_layout_has_no_sidebar_until_the_drawer_opens() {
        let mut app = App::new(80, 30, AppConfig::default());
        let map = layout(80, 30, &app);
        assert!(map.sidebar.is_none());
        assert!(map.menu_items.is_empty());

        app.toggle_sidebar();
        let map = layout(80, 30, &app);
        assert!(map.sidebar.is_some());
        assert_eq!(map.menu_items.len(), MENU.len());
    }

    #[test]
    fn every_screen_renders_without_panicking() {
        let mut app = App::new(120, 40, AppConfig::default());
        for screen in [
            Screen::Dashboard,
            Screen::Clientes,
            Screen::Fornecedores,
            Screen::ContasPagar,
            Screen::ContasReceber,
            Screen::Movimentacoes,
            Screen::Configuracoes,
            Screen::Cadastro,
        ] {
            app.screen = screen;
            render(&app, 120, 40);
        }
    }

    #[test]
    fn overlays_render_without_panicking() {
        let mut app = App::new(80, 30, AppConfig::default());
        app.toggle_sidebar();
        app.notify(crate::app::AlertLevel::Info, "Relatório pronto");
        app.show_loading();
        app.popup = Popup::Confirm {
            message: "Tem certeza?".to_string(),
            action: crate::app::ConfirmAction::DeleteCliente(0),
        };
        render(&app, 80, 30);
    }

    #[test]
    fn tiny_terminals_render_without_panicking() {
        let mut app = App::new(20, 6, AppConfig::default());
        render(&app, 20, 6);
        app.handle_resize(10, 3);
        render(&app, 10, 3);
    }
}
