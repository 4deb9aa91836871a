use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::{inset_horizontal, layout_regions};
use ratatui::widgets::Clear;
use ratatui::Frame;

/// Horizontal margin around the form.
const BODY_MARGIN: u16 = 2;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);
    let viewport = render_form(frame, inset_horizontal(body, BODY_MARGIN), app.form());
    app.record_summary_viewport(viewport);
    frame.render_widget(Footer::widget(footer), footer);
}
