//! Embedded stylesheet and client-side runtime.
//!
//! The palette is injected as CSS variables; the stylesheet and script
//! bodies are static. The script mirrors the Rust-side rules exactly:
//! clamped navigation with one keyboard trigger per direction, and a lazy,
//! idempotent bar-chart renderer discovered by the stable `.bar-chart`
//! class.

use super::theme::Theme;
use crate::chart::MIN_VISIBLE_PERCENT;

/// Build the `<style>` body for a theme: a `:root` variable block followed
/// by the static stylesheet.
pub fn deck_css(theme: &Theme) -> String {
    let vars = format!(
        ":root {{\n  --bg: {bg};\n  --surface: {surface};\n  --border: {border};\n  \
         --text: {text};\n  --accent: {accent};\n  --track: {track};\n  --value-text: {value};\n}}\n",
        bg = theme.background,
        surface = theme.surface,
        border = theme.border,
        text = theme.text,
        accent = theme.accent,
        track = theme.track,
        value = theme.value_text,
    );
    format!("{vars}{STATIC_CSS}")
}

/// Static stylesheet shared by every theme.
const STATIC_CSS: &str = r#"
body {
  margin: 0;
  font-family: 'Segoe UI Emoji', 'Apple Color Emoji', 'Noto Color Emoji', sans-serif;
  background-color: var(--bg);
  color: var(--text);
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 100vh;
  overflow: hidden;
}

h1 {
  color: var(--accent);
  margin-bottom: 20px;
}

ul {
  list-style: none;
  padding-left: 0;
  margin-top: 20px;
}

li {
  margin-bottom: 12px;
  font-size: 1.1em;
  line-height: 1.5;
}

.slides-container {
  width: 90vw;
  max-width: 1200px;
  height: 70vh;
  max-height: 700px;
  display: flex;
  justify-content: center;
  align-items: center;
  position: relative;
}

.slide {
  background-color: var(--surface);
  border: 2px solid var(--border);
  border-radius: 15px;
  padding: 40px 60px;
  box-shadow: 0 0 20px rgba(0, 0, 0, 0.25);
  width: 100%;
  height: 100%;
  box-sizing: border-box;
  display: none;
  flex-direction: column;
  justify-content: flex-start;
  align-items: flex-start;
  overflow-y: auto;
}

.slide.active {
  display: flex;
}

.nav-button {
  position: fixed;
  top: 50%;
  transform: translateY(-50%);
  background-color: var(--surface);
  color: var(--accent);
  border: 2px solid var(--accent);
  border-radius: 50%;
  width: 60px;
  height: 60px;
  font-size: 2em;
  cursor: pointer;
  display: flex;
  justify-content: center;
  align-items: center;
  transition: background-color 0.3s, color 0.3s;
  user-select: none;
  z-index: 1000;
}

.nav-button:hover:not(:disabled) {
  background-color: var(--accent);
  color: var(--surface);
}

.nav-button:disabled {
  border-color: var(--border);
  color: var(--border);
  cursor: not-allowed;
}

#prevButton { left: 2vw; }
#nextButton { right: 2vw; }

.bar-chart {
  width: 100%;
  margin-top: 30px;
  display: flex;
  flex-direction: column;
  gap: 15px;
  padding-bottom: 20px;
}

.bar-row {
  display: flex;
  align-items: center;
  min-height: 40px;
}

.bar-label {
  width: 20%;
  flex-shrink: 0;
  margin-right: 15px;
  font-weight: bold;
}

.bar-track {
  flex-grow: 1;
  background-color: var(--track);
  height: 30px;
  border-radius: 5px;
  position: relative;
  overflow: hidden;
}

.bar-fill {
  height: 100%;
  background-color: var(--accent);
  width: 0%;
  border-radius: 5px;
  display: flex;
  align-items: center;
  justify-content: flex-end;
  padding-right: 10px;
  box-sizing: border-box;
  transition: width 0.8s ease-out;
}

.bar-value {
  color: var(--value-text);
  font-weight: bold;
  font-size: 0.95em;
}
"#;

/// Build the `<script>` body. Only the visibility floor is interpolated so
/// the JS constant always matches [`MIN_VISIBLE_PERCENT`].
pub fn deck_js() -> String {
    format!(
        "const MIN_VISIBLE_PERCENT = {MIN_VISIBLE_PERCENT};\n{RUNTIME_JS}"
    )
}

/// Navigation and chart runtime.
///
/// Rows arrive pre-parsed as a JSON array in `data-chart-data`, so labels
/// containing colons survive intact; malformed entries are skipped with a
/// console warning. Width rules match `chart::layout`.
const RUNTIME_JS: &str = r#"
const slides = Array.from(document.querySelectorAll('.slide'));
const prevButton = document.getElementById('prevButton');
const nextButton = document.getElementById('nextButton');
let currentIndex = 0;

function parseChartRows(rawData) {
  let entries;
  try {
    entries = JSON.parse(rawData);
  } catch (err) {
    console.warn('deckforge: unreadable chart data: ' + err);
    return [];
  }
  if (!Array.isArray(entries)) {
    console.warn('deckforge: chart data is not an array');
    return [];
  }
  const rows = [];
  entries.forEach((entry) => {
    if (!entry || typeof entry.label !== 'string' || !Number.isFinite(entry.value)) {
      console.warn('deckforge: skipping malformed chart row');
      return;
    }
    rows.push({ label: entry.label, value: entry.value });
  });
  return rows;
}

function renderBarChart(container) {
  if (container.dataset.rendered === '1') return;
  const rows = parseChartRows(container.dataset.chartData || '[]');
  let maxValue = 0;
  rows.forEach((r) => { if (r.value > maxValue) maxValue = r.value; });
  console.info('deckforge: chart parsed ' + rows.length + ' rows, max ' + maxValue);

  container.innerHTML = '';
  rows.forEach((row) => {
    let width = maxValue > 0 ? (row.value / maxValue) * 100 : 0;
    if (row.value > 0) width = Math.max(width, MIN_VISIBLE_PERCENT);
    else width = 0;

    const barRow = document.createElement('div');
    barRow.className = 'bar-row';
    barRow.title = row.label + ' — ' + row.value.toLocaleString();

    const label = document.createElement('span');
    label.className = 'bar-label';
    label.textContent = row.label;

    const track = document.createElement('div');
    track.className = 'bar-track';
    const fill = document.createElement('div');
    fill.className = 'bar-fill';
    fill.style.width = '0%';
    const value = document.createElement('span');
    value.className = 'bar-value';
    value.textContent = row.value.toLocaleString();

    fill.appendChild(value);
    track.appendChild(fill);
    barRow.appendChild(label);
    barRow.appendChild(track);
    container.appendChild(barRow);

    setTimeout(() => { fill.style.width = width + '%'; }, 50);
  });

  container.dataset.rendered = '1';
}

function setDisabled(button, disabled) {
  button.disabled = disabled;
  button.setAttribute('aria-disabled', disabled ? 'true' : 'false');
}

function showSlide(index) {
  if (index < 0 || index >= slides.length) return;
  slides.forEach((s) => s.classList.remove('active'));
  slides[index].classList.add('active');
  currentIndex = index;
  setDisabled(prevButton, index === 0);
  setDisabled(nextButton, index === slides.length - 1);

  const chart = slides[index].querySelector('.bar-chart');
  if (chart) setTimeout(() => renderBarChart(chart), 50);
}

prevButton.addEventListener('click', () => showSlide(currentIndex - 1));
nextButton.addEventListener('click', () => showSlide(currentIndex + 1));
document.addEventListener('keydown', (e) => {
  if (e.key === 'ArrowRight') showSlide(currentIndex + 1);
  else if (e.key === 'ArrowLeft') showSlide(currentIndex - 1);
});

showSlide(0);
"#;
