use std::time::Duration;

use font8x8::UnicodeFonts;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use tintbox_adapters::{
    present_adjust_params, present_export_event, present_load_event, present_photo_status,
};
use tintbox_application::{
    ApplicationService, ExportMetrics, ExportMetricsQuery, ExportPhotoCommand, LoadEvent,
    LoadMetrics, LoadMetricsQuery, PickPhotoCommand, PollExportCommand, PollLoadCommand,
    RenderThumbnailCommand, SelectPresetCommand, SwipePresetCommand,
};
use tintbox_domain::{Preset, PreviewFrame, SwipeDirection};

const WINDOW_WIDTH: usize = 1040;
const WINDOW_HEIGHT: usize = 720;
const CANVAS_MARGIN: usize = 24;
const HEADER_TOP: usize = 20;
const HEADER_HEIGHT: usize = 56;
const STATUS_TOP: usize = 88;
const WORKAREA_TOP: usize = 108;
const SPLIT_GUTTER: usize = 16;
const STRIP_HEIGHT: usize = 148;
const STRIP_INSET: usize = 12;
const THUMB_GAP: usize = 8;
const THUMB_LABEL_HEIGHT: usize = 18;
const BUTTON_WIDTH: usize = 118;
const BUTTON_HEIGHT: usize = 32;
const BUTTON_GAP: usize = 12;
const SWIPE_THRESHOLD: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonId {
    OpenPhoto,
    SaveCopy,
}

#[derive(Debug, Clone, Copy)]
struct ButtonSpec {
    id: ButtonId,
    left: usize,
    top: usize,
}

#[derive(Debug, Clone)]
struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

pub fn launch_window(service: &mut ApplicationService, export_dir: &str) -> Result<(), String> {
    let width = WINDOW_WIDTH;
    let height = WINDOW_HEIGHT;
    let buttons = button_specs(width);

    let mut window = Window::new(
        &format!("tintbox | exports={export_dir}"),
        width,
        height,
        WindowOptions::default(),
    )
    .map_err(|error| format!("failed to start UI window: {error}"))?;
    window.limit_update_rate(Some(Duration::from_micros(16_000)));

    let mut buffer = vec![0x1A1D23_u32; width * height];
    let mut status_line = "open a photo to get started".to_string();
    let mut photo_dims: Option<(u32, u32)> = None;
    let mut preview: Option<Canvas> = None;
    let mut thumbnails: Vec<Canvas> = Vec::new();
    let mut preview_stale = false;
    let mut drag_start: Option<f32> = None;
    let mut was_mouse_down = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Left, KeyRepeat::No) {
            service.swipe_preset(SwipePresetCommand {
                direction: SwipeDirection::Previous,
            });
            preview_stale = true;
        }
        if window.is_key_pressed(Key::Right, KeyRepeat::No) {
            service.swipe_preset(SwipePresetCommand {
                direction: SwipeDirection::Next,
            });
            preview_stale = true;
        }

        let preset_count = service.presets().len();
        let mouse_down = window.get_mouse_down(MouseButton::Left);
        let mouse_pos = window.get_mouse_pos(MouseMode::Clamp);
        let hovered_button = mouse_pos.and_then(|(x, y)| button_at_position(x, y, &buttons));
        let hovered_thumb =
            mouse_pos.and_then(|(x, y)| thumbnail_at_position(x, y, width, height, preset_count));

        if mouse_down && !was_mouse_down {
            if let Some(id) = hovered_button {
                match id {
                    ButtonId::OpenPhoto => match service.pick_photo(PickPhotoCommand) {
                        Ok(true) => status_line = "loading photo...".to_string(),
                        Ok(false) => {}
                        Err(error) => status_line = format!("pick failed: {error}"),
                    },
                    ButtonId::SaveCopy => {
                        if service.has_photo() && !service.is_exporting() {
                            match service.export_photo(ExportPhotoCommand) {
                                Ok(()) => status_line = "saving copy...".to_string(),
                                Err(error) => status_line = format!("export failed: {error}"),
                            }
                        }
                    }
                }
            } else if let Some(index) = hovered_thumb {
                service.select_preset(SelectPresetCommand { index });
                preview_stale = true;
            } else if let Some((mouse_x, mouse_y)) = mouse_pos {
                if inside_preview_stage(mouse_x, mouse_y, width, height) {
                    drag_start = Some(mouse_x);
                }
            }
        }

        if !mouse_down && was_mouse_down {
            if let (Some(start_x), Some((end_x, _))) = (drag_start, mouse_pos) {
                if let Some(direction) = swipe_from_drag(end_x - start_x) {
                    service.swipe_preset(SwipePresetCommand { direction });
                    preview_stale = true;
                }
            }
            drag_start = None;
        }
        was_mouse_down = mouse_down;

        if let Some(event) = service
            .poll_load(PollLoadCommand)
            .map_err(|error| format!("load poll failed: {error}"))?
        {
            if let LoadEvent::Loaded {
                width: photo_width,
                height: photo_height,
            } = &event
            {
                photo_dims = Some((*photo_width, *photo_height));
                thumbnails = render_thumbnails(service, width)?;
                preview_stale = true;
            }
            status_line = present_load_event(&event);
        }

        if let Some(event) = service
            .poll_export(PollExportCommand)
            .map_err(|error| format!("export poll failed: {error}"))?
        {
            status_line = present_export_event(&event);
        }

        if preview_stale && service.has_photo() {
            let frame = service
                .render_preview()
                .map_err(|error| format!("preview render failed: {error}"))?;
            preview = frame.map(|frame| {
                canvas_from_frame(&frame, stage_content_width(width), stage_content_height(height))
            });
            preview_stale = false;
        }

        let info_line = match hovered_thumb {
            Some(index) => {
                let preset = &service.presets()[index];
                Some(format!(
                    "{} | {}",
                    preset.name,
                    present_adjust_params(&preset.params)
                ))
            }
            None => photo_dims.map(|(w, h)| present_photo_status(w, h, service.selected_preset())),
        };

        draw_background(&mut buffer, width, height);
        draw_header(
            &mut buffer,
            width,
            &buttons,
            hovered_button,
            service.has_photo(),
            service.is_exporting(),
        );
        draw_status_line(&mut buffer, width, &status_line, info_line.as_deref());
        draw_preview_panel(&mut buffer, width, height, &preview, service.is_loading());
        draw_preset_strip(
            &mut buffer,
            width,
            height,
            service.presets(),
            service.selected_index(),
            hovered_thumb,
            &thumbnails,
        );

        let load_metrics = service
            .load_metrics(LoadMetricsQuery)
            .map_err(|error| format!("load metrics failed: {error}"))?;
        let export_metrics = service
            .export_metrics(ExportMetricsQuery)
            .map_err(|error| format!("export metrics failed: {error}"))?;
        window.set_title(&build_window_title(
            export_dir,
            service.selected_preset().name,
            service.is_loading() || service.is_exporting(),
            &load_metrics,
            &export_metrics,
        ));

        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|error| format!("failed to update UI window: {error}"))?;
    }

    Ok(())
}

fn render_thumbnails(service: &ApplicationService, width: usize) -> Result<Vec<Canvas>, String> {
    let count = service.presets().len();
    let (image_width, image_height) = thumb_image_area(width, count);
    let mut canvases = Vec::with_capacity(count);
    for index in 0..count {
        let frame = service
            .render_thumbnail(RenderThumbnailCommand { index })
            .map_err(|error| format!("thumbnail render failed: {error}"))?;
        let Some(frame) = frame else {
            return Ok(Vec::new());
        };
        canvases.push(canvas_from_frame(&frame, image_width, image_height));
    }
    Ok(canvases)
}

fn build_window_title(
    export_dir: &str,
    preset_name: &str,
    busy: bool,
    load: &LoadMetrics,
    export: &ExportMetrics,
) -> String {
    let busy_info = if busy { "working" } else { "idle" };
    format!(
        "tintbox | exports={} | preset={} | {} | loads s/c/x/f={}/{}/{}/{} | saves s/c/f={}/{}/{} | left/right or drag to switch | esc quit",
        export_dir,
        preset_name,
        busy_info,
        load.submitted_jobs,
        load.completed_jobs,
        load.superseded_jobs,
        load.failed_jobs,
        export.submitted_jobs,
        export.completed_jobs,
        export.failed_jobs
    )
}

fn canvas_from_frame(frame: &PreviewFrame, max_width: usize, max_height: usize) -> Canvas {
    let src_width = frame.width as usize;
    let src_height = frame.height as usize;
    if src_width == 0 || src_height == 0 || frame.pixels.is_empty() {
        return Canvas {
            width: 1,
            height: 1,
            pixels: vec![0_u32],
        };
    }

    let (dst_width, dst_height) =
        fit_within(src_width, src_height, max_width.max(1), max_height.max(1));
    let mut pixels = vec![0_u32; dst_width * dst_height];
    for y in 0..dst_height {
        let src_y = y * src_height / dst_height;
        for x in 0..dst_width {
            let src_x = x * src_width / dst_width;
            let offset = (src_y * src_width + src_x) * 4;
            pixels[y * dst_width + x] = pack_rgb(
                frame.pixels[offset],
                frame.pixels[offset + 1],
                frame.pixels[offset + 2],
            );
        }
    }

    Canvas {
        width: dst_width,
        height: dst_height,
        pixels,
    }
}

fn fit_within(
    src_width: usize,
    src_height: usize,
    max_width: usize,
    max_height: usize,
) -> (usize, usize) {
    let scale = (max_width as f32 / src_width as f32).min(max_height as f32 / src_height as f32);
    let width = ((src_width as f32 * scale).max(1.0)).round() as usize;
    let height = ((src_height as f32 * scale).max(1.0)).round() as usize;
    (width, height)
}

fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | (blue as u32)
}

fn swipe_from_drag(delta_x: f32) -> Option<SwipeDirection> {
    if delta_x <= -SWIPE_THRESHOLD {
        Some(SwipeDirection::Next)
    } else if delta_x >= SWIPE_THRESHOLD {
        Some(SwipeDirection::Previous)
    } else {
        None
    }
}

fn button_specs(width: usize) -> [ButtonSpec; 2] {
    let top = HEADER_TOP + (HEADER_HEIGHT - BUTTON_HEIGHT) / 2;
    let save_left = width.saturating_sub(CANVAS_MARGIN + 12 + BUTTON_WIDTH);
    let open_left = save_left.saturating_sub(BUTTON_GAP + BUTTON_WIDTH);
    [
        ButtonSpec {
            id: ButtonId::OpenPhoto,
            left: open_left,
            top,
        },
        ButtonSpec {
            id: ButtonId::SaveCopy,
            left: save_left,
            top,
        },
    ]
}

fn button_label(id: ButtonId) -> &'static str {
    match id {
        ButtonId::OpenPhoto => "OPEN PHOTO",
        ButtonId::SaveCopy => "SAVE COPY",
    }
}

fn button_at_position(mouse_x: f32, mouse_y: f32, buttons: &[ButtonSpec]) -> Option<ButtonId> {
    let x = mouse_x.max(0.0) as usize;
    let y = mouse_y.max(0.0) as usize;
    buttons
        .iter()
        .find(|spec| {
            x >= spec.left
                && x < spec.left + BUTTON_WIDTH
                && y >= spec.top
                && y < spec.top + BUTTON_HEIGHT
        })
        .map(|spec| spec.id)
}

fn thumbnail_at_position(
    mouse_x: f32,
    mouse_y: f32,
    width: usize,
    height: usize,
    count: usize,
) -> Option<usize> {
    let x = mouse_x.max(0.0) as usize;
    let y = mouse_y.max(0.0) as usize;
    let top = thumb_cell_top(height);
    if y < top || y >= top + thumb_cell_height() {
        return None;
    }
    let cell_width = thumb_cell_width(width, count);
    (0..count).find(|&index| {
        let left = thumb_cell_left(width, count, index);
        x >= left && x < left + cell_width
    })
}

fn inside_preview_stage(mouse_x: f32, mouse_y: f32, width: usize, height: usize) -> bool {
    let x = mouse_x.max(0.0) as usize;
    let y = mouse_y.max(0.0) as usize;
    x >= stage_left() && x < stage_right(width) && y >= stage_top() && y < stage_bottom(height)
}

fn preview_panel_left() -> usize {
    CANVAS_MARGIN
}

fn preview_panel_top() -> usize {
    WORKAREA_TOP
}

fn preview_panel_right(width: usize) -> usize {
    width.saturating_sub(CANVAS_MARGIN)
}

fn preview_panel_bottom(height: usize) -> usize {
    strip_top(height).saturating_sub(SPLIT_GUTTER)
}

fn strip_top(height: usize) -> usize {
    height.saturating_sub(CANVAS_MARGIN + STRIP_HEIGHT)
}

fn stage_left() -> usize {
    preview_panel_left() + 12
}

fn stage_top() -> usize {
    preview_panel_top() + 12
}

fn stage_right(width: usize) -> usize {
    preview_panel_right(width).saturating_sub(12)
}

fn stage_bottom(height: usize) -> usize {
    preview_panel_bottom(height).saturating_sub(12)
}

fn stage_content_width(width: usize) -> usize {
    stage_right(width).saturating_sub(stage_left() + 2)
}

fn stage_content_height(height: usize) -> usize {
    stage_bottom(height).saturating_sub(stage_top() + 2)
}

fn thumb_cell_width(width: usize, count: usize) -> usize {
    let inner = width.saturating_sub(2 * CANVAS_MARGIN + 2 * STRIP_INSET);
    let gaps = THUMB_GAP * count.saturating_sub(1);
    inner.saturating_sub(gaps) / count.max(1)
}

fn thumb_cell_left(width: usize, count: usize, index: usize) -> usize {
    CANVAS_MARGIN + STRIP_INSET + index * (thumb_cell_width(width, count) + THUMB_GAP)
}

fn thumb_cell_top(height: usize) -> usize {
    strip_top(height) + STRIP_INSET
}

fn thumb_cell_height() -> usize {
    STRIP_HEIGHT - 2 * STRIP_INSET
}

fn thumb_image_area(width: usize, count: usize) -> (usize, usize) {
    let image_width = thumb_cell_width(width, count).saturating_sub(8);
    let image_height = thumb_cell_height().saturating_sub(THUMB_LABEL_HEIGHT + 8);
    (image_width, image_height)
}

fn draw_background(buffer: &mut [u32], width: usize, height: usize) {
    for y in 0..height {
        let t = y as f32 / height.max(1) as f32;
        let color = lerp_color(0x23262E, 0x16181D, t);
        for x in 0..width {
            buffer[y * width + x] = color;
        }
    }
}

fn draw_header(
    buffer: &mut [u32],
    width: usize,
    buttons: &[ButtonSpec],
    hovered: Option<ButtonId>,
    photo_loaded: bool,
    exporting: bool,
) {
    let left = CANVAS_MARGIN;
    let band_width = width.saturating_sub(2 * CANVAS_MARGIN);
    fill_rect(buffer, width, left, HEADER_TOP, band_width, HEADER_HEIGHT, 0x262A33);
    draw_rect(buffer, width, left, HEADER_TOP, band_width, HEADER_HEIGHT, 0x3A404D);
    draw_text(buffer, width, left + 16, HEADER_TOP + 24, "TINTBOX", 0xF2F3F5);

    for spec in buttons {
        let enabled = match spec.id {
            ButtonId::OpenPhoto => true,
            ButtonId::SaveCopy => photo_loaded && !exporting,
        };
        draw_button(buffer, width, spec, enabled, hovered == Some(spec.id));
    }
}

fn draw_button(buffer: &mut [u32], width: usize, spec: &ButtonSpec, enabled: bool, hovered: bool) {
    let fill = match (enabled, hovered) {
        (false, _) => 0x2C303A,
        (true, false) => 0x3D77C2,
        (true, true) => 0x4F89D4,
    };
    fill_rect(buffer, width, spec.left, spec.top, BUTTON_WIDTH, BUTTON_HEIGHT, fill);
    let border = if enabled { 0x6FA3E0 } else { 0x3A404D };
    draw_rect(buffer, width, spec.left, spec.top, BUTTON_WIDTH, BUTTON_HEIGHT, border);

    let label = button_label(spec.id);
    let text_color = if enabled { 0xFFFFFF } else { 0x6A7080 };
    let text_x = spec.left + (BUTTON_WIDTH.saturating_sub(label.len() * 8)) / 2;
    let text_y = spec.top + (BUTTON_HEIGHT.saturating_sub(8)) / 2;
    draw_text(buffer, width, text_x, text_y, label, text_color);
}

fn draw_status_line(buffer: &mut [u32], width: usize, status: &str, info: Option<&str>) {
    draw_text(buffer, width, CANVAS_MARGIN + 2, STATUS_TOP, status, 0x9AA3B2);
    if let Some(info) = info {
        let x = width.saturating_sub(CANVAS_MARGIN + info.len() * 8);
        draw_text(buffer, width, x, STATUS_TOP, info, 0x9AA3B2);
    }
}

fn draw_preview_panel(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    preview: &Option<Canvas>,
    loading: bool,
) {
    let panel_left = preview_panel_left();
    let panel_top = preview_panel_top();
    let panel_width = preview_panel_right(width).saturating_sub(panel_left);
    let panel_height = preview_panel_bottom(height).saturating_sub(panel_top);
    fill_rect(buffer, width, panel_left, panel_top, panel_width, panel_height, 0x20242C);
    draw_rect(buffer, width, panel_left, panel_top, panel_width, panel_height, 0x3A404D);

    let left = stage_left();
    let top = stage_top();
    let stage_width = stage_right(width).saturating_sub(left);
    let stage_height = stage_bottom(height).saturating_sub(top);
    fill_rect(buffer, width, left, top, stage_width, stage_height, 0x101216);
    draw_rect(buffer, width, left, top, stage_width, stage_height, 0x2B2F38);

    match preview {
        Some(canvas) => {
            blit_canvas(
                buffer,
                width,
                canvas,
                left + 1,
                top + 1,
                stage_width.saturating_sub(2),
                stage_height.saturating_sub(2),
            );
        }
        None => {
            let hint = if loading {
                "LOADING PHOTO"
            } else {
                "OPEN A PHOTO TO BEGIN"
            };
            let hint_x = left + (stage_width.saturating_sub(hint.len() * 8)) / 2;
            let hint_y = top + stage_height / 2;
            draw_text(buffer, width, hint_x, hint_y, hint, 0x4A5160);
        }
    }
}

fn draw_preset_strip(
    buffer: &mut [u32],
    width: usize,
    height: usize,
    presets: &[Preset],
    selected: usize,
    hovered: Option<usize>,
    thumbnails: &[Canvas],
) {
    let strip_left = CANVAS_MARGIN;
    let strip_width = width.saturating_sub(2 * CANVAS_MARGIN);
    fill_rect(buffer, width, strip_left, strip_top(height), strip_width, STRIP_HEIGHT, 0x20242C);
    draw_rect(buffer, width, strip_left, strip_top(height), strip_width, STRIP_HEIGHT, 0x3A404D);

    let count = presets.len();
    let cell_width = thumb_cell_width(width, count);
    let cell_top = thumb_cell_top(height);
    let cell_height = thumb_cell_height();
    let (image_width, image_height) = thumb_image_area(width, count);

    for (index, preset) in presets.iter().enumerate() {
        let cell_left = thumb_cell_left(width, count, index);
        let cell_fill = if hovered == Some(index) {
            0x2E3340
        } else {
            0x262A33
        };
        fill_rect(buffer, width, cell_left, cell_top, cell_width, cell_height, cell_fill);

        if let Some(canvas) = thumbnails.get(index) {
            blit_canvas(
                buffer,
                width,
                canvas,
                cell_left + 4,
                cell_top + 4,
                image_width,
                image_height,
            );
        }

        let label_x = cell_left + (cell_width.saturating_sub(preset.name.len() * 8)) / 2;
        let label_y = cell_top + cell_height - THUMB_LABEL_HEIGHT + 4;
        draw_text(buffer, width, label_x, label_y, preset.name, 0xC8CDD6);

        if index == selected {
            draw_rect(buffer, width, cell_left, cell_top, cell_width, cell_height, 0xE8A13C);
            draw_rect(
                buffer,
                width,
                cell_left + 1,
                cell_top + 1,
                cell_width.saturating_sub(2),
                cell_height.saturating_sub(2),
                0xE8A13C,
            );
        } else {
            draw_rect(buffer, width, cell_left, cell_top, cell_width, cell_height, 0x3A404D);
        }
    }
}

fn blit_canvas(
    buffer: &mut [u32],
    width: usize,
    canvas: &Canvas,
    left: usize,
    top: usize,
    max_width: usize,
    max_height: usize,
) {
    let draw_width = canvas.width.min(max_width);
    let draw_height = canvas.height.min(max_height);
    let start_x = left + (max_width.saturating_sub(draw_width)) / 2;
    let start_y = top + (max_height.saturating_sub(draw_height)) / 2;
    for y in 0..draw_height {
        for x in 0..draw_width {
            let color = canvas.pixels[y * canvas.width + x];
            set_pixel(buffer, width, start_x + x, start_y + y, color);
        }
    }
}

fn fill_rect(
    buffer: &mut [u32],
    width: usize,
    left: usize,
    top: usize,
    w: usize,
    h: usize,
    color: u32,
) {
    for y in top..top.saturating_add(h) {
        for x in left..left.saturating_add(w) {
            set_pixel(buffer, width, x, y, color);
        }
    }
}

fn draw_rect(
    buffer: &mut [u32],
    width: usize,
    left: usize,
    top: usize,
    w: usize,
    h: usize,
    color: u32,
) {
    if w == 0 || h == 0 {
        return;
    }
    let right = left + w - 1;
    let bottom = top + h - 1;
    for x in left..=right {
        set_pixel(buffer, width, x, top, color);
        set_pixel(buffer, width, x, bottom, color);
    }
    for y in top..=bottom {
        set_pixel(buffer, width, left, y, color);
        set_pixel(buffer, width, right, y, color);
    }
}

fn lerp_color(start: u32, end: u32, t: f32) -> u32 {
    let clamped = t.clamp(0.0, 1.0);
    let sr = ((start >> 16) & 0xFF) as f32;
    let sg = ((start >> 8) & 0xFF) as f32;
    let sb = (start & 0xFF) as f32;
    let er = ((end >> 16) & 0xFF) as f32;
    let eg = ((end >> 8) & 0xFF) as f32;
    let eb = (end & 0xFF) as f32;

    let r = (sr + (er - sr) * clamped).round() as u32;
    let g = (sg + (eg - sg) * clamped).round() as u32;
    let b = (sb + (eb - sb) * clamped).round() as u32;
    (r << 16) | (g << 8) | b
}

fn set_pixel(buffer: &mut [u32], width: usize, x: usize, y: usize, color: u32) {
    let height = buffer.len() / width;
    if x < width && y < height {
        buffer[y * width + x] = color;
    }
}

fn draw_text(buffer: &mut [u32], width: usize, x: usize, y: usize, text: &str, color: u32) {
    let mut cursor_x = x;
    for ch in text.chars() {
        if ch == '\n' {
            continue;
        }
        draw_char(buffer, width, cursor_x, y, ch, color);
        cursor_x = cursor_x.saturating_add(8);
    }
}

fn draw_char(buffer: &mut [u32], width: usize, x: usize, y: usize, ch: char, color: u32) {
    let glyph = font8x8::BASIC_FONTS.get(ch).unwrap_or([0; 8]);
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8 {
            if (bits >> col) & 1 == 1 {
                set_pixel(buffer, width, x + col, y + row, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_past_the_threshold_maps_to_a_swipe() {
        assert_eq!(swipe_from_drag(-80.0), Some(SwipeDirection::Next));
        assert_eq!(swipe_from_drag(80.0), Some(SwipeDirection::Previous));
        assert_eq!(swipe_from_drag(20.0), None);
        assert_eq!(swipe_from_drag(-20.0), None);
    }

    #[test]
    fn fit_within_preserves_aspect_ratio() {
        assert_eq!(fit_within(200, 100, 100, 100), (100, 50));
        assert_eq!(fit_within(100, 400, 100, 100), (25, 100));
    }

    #[test]
    fn thumbnail_hit_testing_matches_cell_layout() {
        let width = WINDOW_WIDTH;
        let height = WINDOW_HEIGHT;
        let inside_x = thumb_cell_left(width, 9, 3) as f32 + 2.0;
        let inside_y = thumb_cell_top(height) as f32 + 2.0;
        assert_eq!(
            thumbnail_at_position(inside_x, inside_y, width, height, 9),
            Some(3)
        );
        assert_eq!(thumbnail_at_position(inside_x, 10.0, width, height, 9), None);
    }

    #[test]
    fn frames_pack_into_window_pixels() {
        let frame = PreviewFrame {
            width: 1,
            height: 1,
            pixels: vec![0x10, 0x20, 0x30, 0xFF],
        };
        let canvas = canvas_from_frame(&frame, 4, 4);
        assert_eq!(canvas.width, 4);
        assert_eq!(canvas.pixels[0], 0x102030);
    }
}
