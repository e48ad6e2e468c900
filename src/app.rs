use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use crate::animate::{self, Entrance};
use crate::config::AppConfig;
use crate::event::{self, LayoutMap, UiEvent};
use crate::format::format_money;
use crate::mask::{mask_document, MaskKind, MaskedInput};
use crate::schedule::{Effect, Scheduler};
use crate::sidebar::{Mode, Sidebar};

/// How long an alert without a close control stays up.
pub const ALERT_TIMEOUT: Duration = Duration::from_secs(5);
/// Fade-out span for alerts and tooltips before removal.
pub const FADE_OUT: Duration = Duration::from_millis(300);
/// Notification banners expire after this.
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(5);
/// How long the refresh overlay stays up.
pub const REFRESH_DELAY: Duration = Duration::from_millis(600);

const DEFAULT_CONFIRM_MESSAGE: &str = "Tem certeza?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Clientes,
    Fornecedores,
    ContasPagar,
    ContasReceber,
    Movimentacoes,
    Configuracoes,
    Cadastro,
}

pub struct MenuItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub screen: Screen,
}

pub const MENU: &[MenuItem] = &[
    MenuItem { label: "Dashboard", icon: "󰋜", screen: Screen::Dashboard },
    MenuItem { label: "Clientes", icon: "󰡉", screen: Screen::Clientes },
    MenuItem { label: "Fornecedores", icon: "󰄢", screen: Screen::Fornecedores },
    MenuItem { label: "Contas a Pagar", icon: "󰄩", screen: Screen::ContasPagar },
    MenuItem { label: "Contas a Receber", icon: "󰄫", screen: Screen::ContasReceber },
    MenuItem { label: "Movimentações", icon: "󰘸", screen: Screen::Movimentacoes },
    MenuItem { label: "Configurações", icon: "󰒓", screen: Screen::Configuracoes },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub id: u64,
    pub level: AlertLevel,
    pub message: String,
    /// Alerts with a close control stay until dismissed; the rest fade
    /// out on a timer.
    pub dismissible: bool,
    pub fading: bool,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub level: AlertLevel,
    pub message: String,
}

/// The tooltip singleton. At most one exists; creating another replaces
/// it (last writer wins).
#[derive(Debug, Clone)]
pub struct Tooltip {
    pub text: String,
    pub anchor: Rect,
    pub fading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
    Confirm {
        message: String,
        action: ConfirmAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteCliente(usize),
}

#[derive(Debug, Clone)]
pub struct Card {
    pub title: &'static str,
    pub value: String,
    pub tone: AlertLevel,
}

#[derive(Debug, Clone)]
pub struct Cliente {
    pub nome: String,
    pub documento: String,
    pub limite: String,
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub input: MaskedInput,
}

#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<FormField>,
    /// Focused field index; `fields.len()` means the submit control.
    pub focused: usize,
    /// Set on submit, never cleared on this screen: the web build
    /// assumed a page navigation would follow.
    pub submitting: bool,
}

impl Form {
    fn new() -> Self {
        Self {
            fields: vec![
                FormField { label: "Nome", input: MaskedInput::new(MaskKind::None) },
                FormField { label: "CPF/CNPJ", input: MaskedInput::new(MaskKind::Document) },
                FormField { label: "Limite de Crédito", input: MaskedInput::new(MaskKind::Money) },
            ],
            focused: 0,
            submitting: false,
        }
    }

    pub fn on_submit_control(&self) -> bool {
        self.focused == self.fields.len()
    }
}

pub struct App {
    pub config: AppConfig,
    pub sidebar: Sidebar,
    pub screen: Screen,
    pub focus: Focus,
    pub selected_menu: usize,
    pub hovered_menu: Option<usize>,
    pub selected_row: usize,
    pub cards: Vec<Card>,
    pub clientes: Vec<Cliente>,
    pub form: Form,
    pub alerts: Vec<Alert>,
    pub toasts: Vec<Toast>,
    pub tooltip: Option<Tooltip>,
    pub popup: Popup,
    pub loading: bool,
    pub cards_entrance: Entrance,
    pub menu_entrance: Entrance,
    pub scheduler: Scheduler,
    pub layout: LayoutMap,
    pub size: (u16, u16),
    pub spinner_frame: usize,
    pub should_quit: bool,
    id_counter: u64,
}

impl App {
    pub fn new(width: u16, height: u16, config: AppConfig) -> Self {
        let sidebar = Sidebar::new(width, config.sidebar_collapsed);

        let cards = vec![
            Card {
                title: "Contas a Receber",
                value: format_money(1_254_030),
                tone: AlertLevel::Success,
            },
            Card {
                title: "Contas a Pagar",
                value: format_money(834_512),
                tone: AlertLevel::Warning,
            },
            Card {
                title: "Clientes Ativos",
                value: "128".to_string(),
                tone: AlertLevel::Info,
            },
            Card {
                title: "Saldo em Caixa",
                value: format_money(4_190_277),
                tone: AlertLevel::Success,
            },
        ];

        let clientes = vec![
            Cliente {
                nome: "Maria Oliveira".to_string(),
                documento: mask_document("12345678901"),
                limite: format_money(250_000),
            },
            Cliente {
                nome: "Comercial Andrade Ltda".to_string(),
                documento: mask_document("12345678000195"),
                limite: format_money(1_200_000),
            },
            Cliente {
                nome: "João Pereira".to_string(),
                documento: mask_document("98765432100"),
                limite: format_money(150_000),
            },
        ];

        let mut app = Self {
            config,
            sidebar,
            screen: Screen::Dashboard,
            focus: Focus::Menu,
            selected_menu: 0,
            hovered_menu: None,
            selected_row: 0,
            cards_entrance: Entrance::staggered(cards.len(), animate::CARD_STEP),
            menu_entrance: Entrance::staggered(MENU.len(), animate::MENU_STEP),
            cards,
            clientes,
            form: Form::new(),
            alerts: Vec::new(),
            toasts: Vec::new(),
            tooltip: None,
            popup: Popup::None,
            loading: false,
            scheduler: Scheduler::new(),
            layout: LayoutMap::default(),
            size: (width, height),
            spinner_frame: 0,
            should_quit: false,
            id_counter: 0,
        };

        // Server-rendered pages arrive with flash messages; the shell
        // starts with one so the auto-dismiss path is live from boot.
        app.alert(AlertLevel::Info, "Dados de demonstração carregados", false);
        app.relayout();
        app
    }

    fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    fn relayout(&mut self) {
        let layout = crate::ui::layout(self.size.0, self.size.1, self);
        self.layout = layout;
    }

    fn persist_config(&mut self) {
        if let Err(e) = self.config.save() {
            tracing::warn!("Failed to persist config: {}", e);
            self.alert(
                AlertLevel::Error,
                "Não foi possível salvar as preferências",
                true,
            );
        }
    }

    // --- input -----------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.popup.clone() {
            Popup::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
                ) {
                    self.popup = Popup::None;
                }
                return;
            }
            Popup::Confirm { action, .. } => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('s') | KeyCode::Enter => {
                        self.popup = Popup::None;
                        self.apply_confirmed(action);
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        self.popup = Popup::None;
                    }
                    _ => {}
                }
                return;
            }
            Popup::None => {}
        }

        if self.screen == Screen::Cadastro {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.close_overlay(),
            KeyCode::Char('b') => self.toggle_sidebar(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Menu => Focus::Content,
                    Focus::Content => Focus::Menu,
                };
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Menu => self.activate_menu(self.selected_menu),
                Focus::Content => {
                    if self.screen == Screen::Configuracoes {
                        self.toggle_notifications();
                    }
                }
            },
            KeyCode::Char('n') => {
                if self.screen == Screen::Clientes {
                    self.enter_screen(Screen::Cadastro);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.screen == Screen::Clientes {
                    self.request_delete_selected();
                }
            }
            KeyCode::Char('x') => self.dismiss_newest(),
            KeyCode::Char('R') => self.refresh(),
            KeyCode::Char('?') | KeyCode::Char('h') => self.popup = Popup::Help,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let field_count = self.form.fields.len();
        match key.code {
            KeyCode::Esc => {
                self.enter_screen(Screen::Clientes);
            }
            KeyCode::Tab => {
                self.form.focused = (self.form.focused + 1) % (field_count + 1);
            }
            KeyCode::BackTab => {
                self.form.focused = self.form.focused.checked_sub(1).unwrap_or(field_count);
            }
            KeyCode::Enter => {
                if self.form.on_submit_control() {
                    self.submit_form();
                } else {
                    self.form.focused += 1;
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form.fields.get_mut(self.form.focused) {
                    field.input.backspace();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.form.fields.get_mut(self.form.focused) {
                    field.input.push(c);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let drawer_open = self.sidebar.shown();
        let scroll_locked = self.sidebar.scroll_locked();
        if let Some(ui_event) = event::map_mouse(mouse, &self.layout, drawer_open, scroll_locked) {
            self.handle_ui_event(ui_event);
        }
    }

    pub fn handle_ui_event(&mut self, ui_event: UiEvent) {
        match ui_event {
            UiEvent::ToggleSidebar => self.toggle_sidebar(),
            UiEvent::CloseOverlay => self.close_overlay(),
            UiEvent::PointerAt(x, y) => self.pointer_moved(x, y),
            UiEvent::ActivateMenu(i) => self.activate_menu(i),
            UiEvent::FocusField(i) => {
                if self.screen == Screen::Cadastro && i <= self.form.fields.len() {
                    self.form.focused = i;
                }
            }
            UiEvent::Submit => self.submit_form(),
            UiEvent::SelectRow(i) => {
                self.focus = Focus::Content;
                self.selected_row = i;
            }
            UiEvent::ScrollUp => self.scroll_content(-1),
            UiEvent::ScrollDown => self.scroll_content(1),
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.sidebar.on_resize(width);
        self.relayout();
    }

    // --- sidebar ---------------------------------------------------------

    pub fn toggle_sidebar(&mut self) {
        match self.sidebar.mode() {
            Mode::Wide => {
                if let Some(collapsed) = self.sidebar.toggle_collapsed() {
                    self.config.sidebar_collapsed = collapsed;
                    self.persist_config();
                    if !collapsed {
                        // expanding removes the context the tooltip needs
                        self.tooltip = None;
                        self.scheduler
                            .cancel_where(|e| matches!(e, Effect::RemoveTooltip));
                    }
                    self.relayout();
                }
            }
            Mode::Narrow => {
                if self.sidebar.shown() {
                    self.sidebar.hide_drawer();
                } else {
                    self.sidebar.show_drawer();
                }
                self.relayout();
            }
        }
    }

    pub fn close_overlay(&mut self) {
        if self.sidebar.shown() {
            self.sidebar.hide_drawer();
            self.relayout();
        }
    }

    // --- pointer / tooltip -----------------------------------------------

    fn pointer_moved(&mut self, x: u16, y: u16) {
        let hit = self.layout.menu_item_at(x, y);
        if hit == self.hovered_menu {
            return;
        }
        match hit {
            Some(index) => self.menu_enter(index),
            None => self.menu_leave(),
        }
        self.hovered_menu = hit;
    }

    fn menu_enter(&mut self, index: usize) {
        if !self.sidebar.rail_collapsed() {
            return;
        }
        self.scheduler
            .cancel_where(|e| matches!(e, Effect::RemoveTooltip));
        let anchor = self
            .layout
            .menu_items
            .get(index)
            .copied()
            .unwrap_or_default();
        let label = MENU.get(index).map(|m| m.label).unwrap_or_default();
        self.tooltip = Some(Tooltip {
            text: label.to_string(),
            anchor,
            fading: false,
        });
    }

    fn menu_leave(&mut self) {
        if let Some(tooltip) = &mut self.tooltip {
            if !tooltip.fading {
                tooltip.fading = true;
                self.scheduler.schedule(FADE_OUT, Effect::RemoveTooltip);
            }
        }
    }

    // --- navigation ------------------------------------------------------

    fn select_prev(&mut self) {
        match self.focus {
            Focus::Menu => {
                self.selected_menu = self.selected_menu.checked_sub(1).unwrap_or(MENU.len() - 1);
            }
            Focus::Content => self.scroll_content(-1),
        }
    }

    fn select_next(&mut self) {
        match self.focus {
            Focus::Menu => {
                self.selected_menu = (self.selected_menu + 1) % MENU.len();
            }
            Focus::Content => self.scroll_content(1),
        }
    }

    fn scroll_content(&mut self, delta: i32) {
        if self.screen != Screen::Clientes || self.clientes.is_empty() {
            return;
        }
        let last = self.clientes.len() - 1;
        self.selected_row = if delta < 0 {
            self.selected_row.saturating_sub(1)
        } else {
            (self.selected_row + 1).min(last)
        };
    }

    pub fn activate_menu(&mut self, index: usize) {
        let Some(item) = MENU.get(index) else { return };
        self.selected_menu = index;
        self.enter_screen(item.screen);
        if self.sidebar.shown() {
            self.sidebar.hide_drawer();
            self.relayout();
        }
    }

    fn enter_screen(&mut self, screen: Screen) {
        // Leaving the form is the TUI's page navigation: a fresh form
        // next time, loading state included.
        if self.screen == Screen::Cadastro || screen == Screen::Cadastro {
            self.form = Form::new();
        }
        self.screen = screen;
        self.selected_row = 0;
        if screen == Screen::Cadastro {
            self.focus = Focus::Content;
        }
        self.relayout();
    }

    pub fn screen_title(&self) -> &'static str {
        match self.screen {
            Screen::Dashboard => "Dashboard",
            Screen::Clientes => "Clientes",
            Screen::Fornecedores => "Fornecedores",
            Screen::ContasPagar => "Contas a Pagar",
            Screen::ContasReceber => "Contas a Receber",
            Screen::Movimentacoes => "Movimentações",
            Screen::Configuracoes => "Configurações",
            Screen::Cadastro => "Novo Cliente",
        }
    }

    // --- alerts / banners ------------------------------------------------

    pub fn alert(
        &mut self,
        level: AlertLevel,
        message: impl Into<String>,
        dismissible: bool,
    ) -> u64 {
        let id = self.next_id();
        self.alerts.push(Alert {
            id,
            level,
            message: message.into(),
            dismissible,
            fading: false,
        });
        if !dismissible {
            self.scheduler.schedule(ALERT_TIMEOUT, Effect::FadeAlert(id));
            self.scheduler
                .schedule(ALERT_TIMEOUT + FADE_OUT, Effect::RemoveAlert(id));
        }
        self.relayout();
        id
    }

    /// Dismiss the newest banner, or failing that the newest closable
    /// alert.
    pub fn dismiss_newest(&mut self) {
        if let Some(toast) = self.toasts.pop() {
            self.scheduler
                .cancel_where(|e| *e == Effect::RemoveToast(toast.id));
            return;
        }
        if let Some(pos) = self.alerts.iter().rposition(|a| a.dismissible) {
            let alert = self.alerts.remove(pos);
            self.scheduler.cancel_where(
                |e| matches!(e, Effect::FadeAlert(id) | Effect::RemoveAlert(id) if *id == alert.id),
            );
            self.relayout();
        }
    }

    /// Fixed-position notification banner, auto-removed after
    /// [`TOAST_TIMEOUT`], mirrored to the desktop when configured.
    pub fn notify(&mut self, level: AlertLevel, message: impl Into<String>) -> u64 {
        let message = message.into();
        let id = self.next_id();
        self.toasts.push(Toast {
            id,
            level,
            message: message.clone(),
        });
        self.scheduler
            .schedule(TOAST_TIMEOUT, Effect::RemoveToast(id));
        if self.config.notifications {
            let _ = notify_rust::Notification::new()
                .summary("painel")
                .body(&message)
                .show();
        }
        id
    }

    // --- loading overlay -------------------------------------------------

    pub fn show_loading(&mut self) {
        self.loading = true;
    }

    pub fn hide_loading(&mut self) {
        self.loading = false;
    }

    /// Re-fetch the demo figures behind the full-screen overlay.
    pub fn refresh(&mut self) {
        if self.loading {
            return;
        }
        self.show_loading();
        self.scheduler.schedule(REFRESH_DELAY, Effect::HideLoading);
    }

    // --- confirmation ----------------------------------------------------

    /// Open the confirmation popup. `message` falls back to the stock
    /// prompt when the caller has nothing more specific.
    pub fn request_confirm(&mut self, action: ConfirmAction, message: Option<String>) {
        self.popup = Popup::Confirm {
            message: message.unwrap_or_else(|| DEFAULT_CONFIRM_MESSAGE.to_string()),
            action,
        };
    }

    fn request_delete_selected(&mut self) {
        let Some(cliente) = self.clientes.get(self.selected_row) else {
            return;
        };
        let message = format!("Excluir cliente '{}'?", cliente.nome);
        self.request_confirm(ConfirmAction::DeleteCliente(self.selected_row), Some(message));
    }

    fn apply_confirmed(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::DeleteCliente(index) => {
                if index < self.clientes.len() {
                    let cliente = self.clientes.remove(index);
                    if self.selected_row >= self.clientes.len() && self.selected_row > 0 {
                        self.selected_row -= 1;
                    }
                    self.notify(
                        AlertLevel::Success,
                        format!("Cliente '{}' removido", cliente.nome),
                    );
                    self.relayout();
                }
            }
        }
    }

    // --- form ------------------------------------------------------------

    pub fn submit_form(&mut self) {
        if self.screen != Screen::Cadastro || self.form.submitting {
            return;
        }
        self.form.submitting = true;
    }

    fn toggle_notifications(&mut self) {
        self.config.notifications = !self.config.notifications;
        self.persist_config();
        let message = if self.config.notifications {
            "Notificações ativadas"
        } else {
            "Notificações desativadas"
        };
        self.notify(AlertLevel::Info, message);
    }

    // --- timers ----------------------------------------------------------

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        for effect in self.scheduler.fire_due(now) {
            match effect {
                Effect::FadeAlert(id) => {
                    if let Some(alert) = self.alerts.iter_mut().find(|a| a.id == id) {
                        alert.fading = true;
                    }
                }
                Effect::RemoveAlert(id) => {
                    self.alerts.retain(|a| a.id != id);
                    self.relayout();
                }
                Effect::RemoveTooltip => self.tooltip = None,
                Effect::RemoveToast(id) => self.toasts.retain(|t| t.id != id),
                Effect::HideLoading => {
                    self.hide_loading();
                    self.notify(AlertLevel::Success, "Dados atualizados");
                }
            }
        }

        if self.form.submitting || self.loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn wide_app() -> App {
        App::new(120, 40, AppConfig::default())
    }

    fn narrow_app() -> App {
        App::new(80, 30, AppConfig::default())
    }

    #[test]
    fn toggling_the_sidebar_twice_restores_state_and_flag() {
        let mut app = wide_app();
        assert!(!app.sidebar.collapsed());

        app.toggle_sidebar();
        assert!(app.sidebar.collapsed());
        assert!(app.config.sidebar_collapsed);

        app.toggle_sidebar();
        assert!(!app.sidebar.collapsed());
        assert!(!app.config.sidebar_collapsed);
    }

    #[test]
    fn persisted_flag_renders_pre_collapsed() {
        let config = AppConfig {
            sidebar_collapsed: true,
            ..Default::default()
        };
        let app = App::new(120, 40, config);
        assert!(app.sidebar.rail_collapsed());
    }

    #[test]
    fn narrow_toggle_opens_the_drawer_and_escape_closes_it() {
        let mut app = narrow_app();
        app.handle_key(key(KeyCode::Char('b')));
        assert!(app.sidebar.shown());
        assert!(app.sidebar.scroll_locked());

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.sidebar.shown());
        assert!(!app.sidebar.scroll_locked());
    }

    #[test]
    fn resize_past_the_breakpoint_closes_the_drawer() {
        let mut app = narrow_app();
        app.toggle_sidebar();
        assert!(app.sidebar.shown());

        app.handle_resize(140, 40);
        assert!(!app.sidebar.shown());
        assert_eq!(app.sidebar.mode(), Mode::Wide);
    }

    #[test]
    fn auto_dismiss_alert_fades_then_disappears() {
        let start = Instant::now();
        let mut app = wide_app();
        app.alerts.clear();
        let id = app.alert(AlertLevel::Warning, "Estoque baixo", false);

        app.tick_at(start + Duration::from_millis(5150));
        let alert = app.alerts.iter().find(|a| a.id == id).unwrap();
        assert!(alert.fading);

        app.tick_at(start + Duration::from_secs(6));
        assert!(app.alerts.iter().all(|a| a.id != id));
    }

    #[test]
    fn dismissible_alert_outlives_the_timeout() {
        let start = Instant::now();
        let mut app = wide_app();
        let id = app.alert(AlertLevel::Error, "Falha ao salvar", true);

        app.tick_at(start + Duration::from_secs(30));
        assert!(app.alerts.iter().any(|a| a.id == id && !a.fading));

        app.toasts.clear();
        app.dismiss_newest();
        assert!(app.alerts.iter().all(|a| a.id != id));
    }

    #[test]
    fn banner_expires_after_its_fixed_duration() {
        let start = Instant::now();
        let mut app = wide_app();
        let id = app.notify(AlertLevel::Info, "Relatório pronto");
        assert!(app.toasts.iter().any(|t| t.id == id));

        app.tick_at(start + Duration::from_secs(6));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn declining_a_confirmation_blocks_the_action() {
        let mut app = wide_app();
        app.screen = Screen::Clientes;
        let before = app.clientes.len();

        app.handle_key(key(KeyCode::Char('d')));
        assert!(matches!(app.popup, Popup::Confirm { .. }));

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.popup, Popup::None);
        assert_eq!(app.clientes.len(), before);
    }

    #[test]
    fn accepting_a_confirmation_applies_the_action() {
        let mut app = wide_app();
        app.screen = Screen::Clientes;
        let before = app.clientes.len();

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.clientes.len(), before - 1);
        assert!(!app.toasts.is_empty());
    }

    #[test]
    fn confirmation_message_defaults_when_unspecified() {
        let mut app = wide_app();
        app.request_confirm(ConfirmAction::DeleteCliente(0), None);
        match &app.popup {
            Popup::Confirm { message, .. } => assert_eq!(message, "Tem certeza?"),
            other => panic!("unexpected popup: {:?}", other),
        }
    }

    #[test]
    fn tooltip_appears_only_while_the_rail_is_collapsed() {
        let mut app = wide_app();
        app.toggle_sidebar();
        assert!(app.sidebar.rail_collapsed());

        let rect = app.layout.menu_items[1];
        app.handle_ui_event(UiEvent::PointerAt(rect.x, rect.y));
        let tooltip = app.tooltip.as_ref().expect("tooltip should exist");
        assert_eq!(tooltip.text, MENU[1].label);
        assert!(!tooltip.fading);

        // expanded rail shows labels, so no tooltip
        app.toggle_sidebar();
        assert!(app.tooltip.is_none());
        let rect = app.layout.menu_items[1];
        app.hovered_menu = None;
        app.handle_ui_event(UiEvent::PointerAt(rect.x, rect.y));
        assert!(app.tooltip.is_none());
    }

    #[test]
    fn leaving_fades_the_tooltip_and_reentering_cancels_the_removal() {
        let start = Instant::now();
        let mut app = wide_app();
        app.toggle_sidebar();

        let rect = app.layout.menu_items[0];
        app.handle_ui_event(UiEvent::PointerAt(rect.x, rect.y));
        app.handle_ui_event(UiEvent::PointerAt(0, app.size.1 - 1));
        assert!(app.tooltip.as_ref().is_some_and(|t| t.fading));

        // back on the item before the fade deadline: fresh tooltip, no
        // stale removal pending
        app.handle_ui_event(UiEvent::PointerAt(rect.x, rect.y));
        app.tick_at(start + Duration::from_secs(1));
        assert!(app.tooltip.as_ref().is_some_and(|t| !t.fading));

        // leave for good and the singleton goes away
        app.handle_ui_event(UiEvent::PointerAt(0, app.size.1 - 1));
        app.tick_at(start + Duration::from_secs(2));
        assert!(app.tooltip.is_none());
    }

    #[test]
    fn hovering_a_new_item_replaces_the_tooltip() {
        let mut app = wide_app();
        app.toggle_sidebar();

        let first = app.layout.menu_items[0];
        let second = app.layout.menu_items[1];
        app.handle_ui_event(UiEvent::PointerAt(first.x, first.y));
        app.handle_ui_event(UiEvent::PointerAt(second.x, second.y));

        let tooltip = app.tooltip.as_ref().unwrap();
        assert_eq!(tooltip.text, MENU[1].label);
        assert!(!tooltip.fading);
    }

    #[test]
    fn form_fields_mask_while_typing() {
        let mut app = wide_app();
        app.screen = Screen::Clientes;
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.screen, Screen::Cadastro);

        app.handle_key(key(KeyCode::Tab));
        for c in "12345678901".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.form.fields[1].input.value(), "123.456.789-01");

        app.handle_key(key(KeyCode::Tab));
        for c in "12345".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.form.fields[2].input.value(), "R$ 123,45");
    }

    #[test]
    fn submitting_disables_the_submit_control() {
        let mut app = wide_app();
        app.screen = Screen::Clientes;
        app.handle_key(key(KeyCode::Char('n')));

        app.form.focused = app.form.fields.len();
        app.handle_key(key(KeyCode::Enter));
        assert!(app.form.submitting);

        // a second submit is a no-op; the state never re-enables here
        app.handle_key(key(KeyCode::Enter));
        assert!(app.form.submitting);
    }

    #[test]
    fn leaving_the_form_resets_it_like_a_page_navigation() {
        let mut app = wide_app();
        app.screen = Screen::Clientes;
        app.handle_key(key(KeyCode::Char('n')));
        app.handle_key(key(KeyCode::Char('A')));
        app.submit_form();
        assert!(app.form.submitting);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Clientes);

        app.handle_key(key(KeyCode::Char('n')));
        assert!(!app.form.submitting);
        assert!(app.form.fields[0].input.is_empty());
    }

    #[test]
    fn loading_overlay_toggles_explicitly() {
        let mut app = wide_app();
        app.show_loading();
        assert!(app.loading);
        app.hide_loading();
        assert!(!app.loading);
    }

    #[test]
    fn refresh_shows_the_overlay_then_hides_it() {
        let start = Instant::now();
        let mut app = wide_app();
        app.handle_key(key(KeyCode::Char('R')));
        assert!(app.loading);

        // pressing again while the overlay is up schedules nothing extra
        app.handle_key(key(KeyCode::Char('R')));

        app.tick_at(start + Duration::from_secs(1));
        assert!(!app.loading);
        assert!(app.toasts.iter().any(|t| t.message == "Dados atualizados"));
    }

    #[test]
    fn menu_activation_switches_screens_and_closes_the_drawer() {
        let mut app = narrow_app();
        app.toggle_sidebar();
        assert!(app.sidebar.shown());

        app.handle_ui_event(UiEvent::ActivateMenu(1));
        assert_eq!(app.screen, Screen::Clientes);
        assert!(!app.sidebar.shown());
    }

    #[test]
    fn entrance_delays_follow_list_position() {
        let app = wide_app();
        assert_eq!(app.cards_entrance.len(), app.cards.len());
        assert_eq!(app.menu_entrance.len(), MENU.len());
    }
}
