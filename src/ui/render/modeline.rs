use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_DIM, STYLE_KEY, STYLE_MODE, STYLE_MODELINE};

pub fn render_modeline(m: &Model) -> String {
    let width = m.screen_width;
    let mode = format!(" {} ", m.mode());
    let mode_w = mode.chars().count();
    if width <= mode_w {
        return STYLE_MODE.render(&mode.chars().take(width).collect::<String>());
    }

    // info pairs, dropped from the right until they fit
    let pairs_def: Vec<(String, String)> = vec![
        ("steps".to_string(), m.steps.to_string()),
        ("n".to_string(), m.array.len().to_string()),
        (
            "range".to_string(),
            format!("{}..{}", m.config.min_value, m.config.max_value),
        ),
    ];
    let quit_plain = "q:quit";
    let sep = "  ";

    let avail = width - mode_w;
    let quit_w = quit_plain.chars().count() + 1;
    let mut pairs: Vec<(String, usize)> = pairs_def
        .iter()
        .map(|(k, v)| {
            let plain_len = 1 + k.chars().count() + 1 + v.chars().count();
            let rendered = format!(
                "{}{}",
                STYLE_MODELINE.render(&format!(" {k}:")),
                STYLE_DIM.render(v)
            );
            (rendered, plain_len)
        })
        .collect();
    let pairs_width = |pairs: &[(String, usize)]| -> usize {
        pairs.iter().map(|(_, w)| *w).sum::<usize>() + sep.len() * pairs.len().saturating_sub(1)
    };
    while !pairs.is_empty() && pairs_width(&pairs) + quit_w > avail {
        pairs.pop();
    }
    let show_quit = pairs_width(&pairs) + quit_w <= avail;

    let left = pairs
        .iter()
        .map(|(r, _)| r.clone())
        .collect::<Vec<_>>()
        .join(STYLE_MODELINE.render(sep).as_str());
    let used = pairs_width(&pairs) + if show_quit { quit_w } else { 0 };
    let filler = STYLE_MODELINE.render(&" ".repeat(avail - used));
    let quit = if show_quit {
        format!(
            "{}{}",
            STYLE_KEY.render("q"),
            STYLE_MODELINE.render(":quit ")
        )
    } else {
        String::new()
    };
    format!("{}{left}{filler}{quit}", STYLE_MODE.render(&mode))
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, RenderConfig};
    use regex::Regex;

    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn modeline_is_exact_width_at_various_sizes() {
        for w in [80usize, 40, 25, 12, 8, 3] {
            let mut m = crate::ui::initial_model(Config::default(), RenderConfig::default());
            m.update(crate::ui::Msg::WindowSize {
                width: w,
                height: 24,
            });
            let line = strip_ansi(&m.render_modeline());
            assert_eq!(line.chars().count(), w, "width {w}: `{line}`");
        }
    }

    #[test]
    fn modeline_shows_mode_and_counts() {
        let mut m = crate::ui::initial_model(Config::default(), RenderConfig::default());
        let idle = strip_ansi(&m.render_modeline());
        assert!(idle.starts_with(" IDLE "));
        assert!(idle.contains("steps:0"));
        assert!(idle.contains("n:50"));
        assert!(idle.contains("range:0..100"));
        assert!(idle.ends_with("q:quit "));

        m.update(crate::ui::Msg::Start);
        let sorting = strip_ansi(&m.render_modeline());
        assert!(sorting.starts_with(" SORTING "));
    }
}
