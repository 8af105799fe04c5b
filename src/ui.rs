pub fn render_index(tool_count: usize, updated_through: &str) -> String {
    INDEX_HTML
        .replace("{{TOOL_COUNT}}", &format_count(tool_count))
        .replace("{{UPDATED_THROUGH}}", updated_through)
}

fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::new();
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>AI Tool Traffic Dashboard</title>
  <style>
    :root {
      --primary: #6366f1;
      --secondary: #8b5cf6;
      --accent: #06b6d4;
      --success: #10b981;
      --warning: #f59e0b;
      --danger: #ef4444;
      --sidebar-1: #1e293b;
      --sidebar-2: #334155;
      --ink: #1e293b;
      --muted: #64748b;
      --card-border: #e2e8f0;
      --page-bg: #f8fafc;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--page-bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
    }

    .layout {
      display: grid;
      grid-template-columns: 250px 1fr;
      min-height: 100vh;
    }

    .sidebar {
      background: linear-gradient(180deg, var(--sidebar-1) 0%, var(--sidebar-2) 100%);
      color: white;
      padding: 24px 16px;
      display: flex;
      flex-direction: column;
      gap: 20px;
    }

    .brand h2 {
      margin: 0;
      font-size: 1.3rem;
      color: #60a5fa;
      text-align: center;
    }

    .brand p {
      margin: 4px 0 0;
      font-size: 12px;
      color: #94a3b8;
      text-align: center;
    }

    .nav-section-title {
      color: #94a3b8;
      font-size: 11px;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      margin-bottom: 8px;
    }

    .nav-button {
      display: block;
      width: 100%;
      padding: 10px 14px;
      margin: 4px 0;
      background: rgba(255, 255, 255, 0.08);
      color: white;
      border: none;
      border-radius: 8px;
      font-size: 14px;
      text-align: left;
      cursor: pointer;
      transition: background 150ms ease, transform 150ms ease;
    }

    .nav-button:hover {
      background: rgba(255, 255, 255, 0.18);
      transform: translateX(3px);
    }

    .nav-button.active {
      background: linear-gradient(135deg, var(--primary), var(--secondary));
      box-shadow: 0 4px 12px rgba(99, 102, 241, 0.35);
    }

    .track-select {
      width: 100%;
      padding: 8px;
      border-radius: 8px;
      border: none;
      background: rgba(255, 255, 255, 0.12);
      color: white;
      font-size: 13px;
    }

    .track-select option {
      color: var(--ink);
    }

    .info-card {
      background: rgba(255, 255, 255, 0.1);
      padding: 10px 12px;
      border-radius: 8px;
      margin: 6px 0;
    }

    .info-card span {
      display: block;
      color: #94a3b8;
      font-size: 11px;
      margin-bottom: 2px;
    }

    .info-card strong {
      color: white;
      font-size: 13px;
      font-weight: 600;
    }

    .content {
      padding: 28px 32px 48px;
      display: grid;
      gap: 24px;
      align-content: start;
    }

    .page-title {
      margin: 0;
      font-size: 2rem;
      font-weight: 700;
      background: linear-gradient(135deg, var(--primary), var(--secondary));
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .metric-card {
      background: white;
      border: 1px solid var(--card-border);
      border-radius: 14px;
      padding: 18px;
      text-align: center;
      box-shadow: 0 4px 6px -2px rgba(0, 0, 0, 0.08);
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    .metric-card:hover {
      transform: translateY(-2px);
      box-shadow: 0 10px 20px -6px rgba(0, 0, 0, 0.12);
    }

    .metric-value {
      font-size: 1.8rem;
      font-weight: 700;
      color: var(--primary);
      margin-bottom: 4px;
    }

    .metric-label {
      font-size: 0.8rem;
      color: var(--muted);
      text-transform: uppercase;
      letter-spacing: 0.05em;
    }

    .panel {
      background: white;
      border: 1px solid var(--card-border);
      border-radius: 14px;
      padding: 20px;
      box-shadow: 0 4px 6px -2px rgba(0, 0, 0, 0.08);
    }

    .panel h2 {
      margin: 0 0 14px;
      font-size: 1.15rem;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 14px;
    }

    th {
      background: linear-gradient(135deg, var(--primary), var(--secondary));
      color: white;
      font-weight: 600;
      padding: 10px;
      text-align: center;
    }

    td {
      padding: 9px 10px;
      border-bottom: 1px solid #f1f5f9;
      text-align: center;
    }

    td:first-child,
    th:first-child {
      text-align: left;
    }

    tr:hover td {
      background: #f8fafc;
    }

    .pct-up {
      color: var(--success);
      font-weight: 600;
    }

    .pct-down {
      color: var(--danger);
      font-weight: 600;
    }

    .heatmap {
      display: grid;
      gap: 3px;
      font-size: 13px;
    }

    .heatmap-cell {
      padding: 9px 4px;
      border-radius: 6px;
      text-align: center;
      color: #111;
      font-weight: 600;
    }

    .heatmap-label {
      padding: 9px 8px 9px 0;
      text-align: right;
      white-space: nowrap;
      overflow: hidden;
      text-overflow: ellipsis;
    }

    .heatmap-head {
      text-align: center;
      font-weight: 600;
      color: var(--muted);
      padding-bottom: 4px;
    }

    svg.chart {
      width: 100%;
      height: 300px;
      display: block;
    }

    svg.chart text {
      font-family: inherit;
    }

    .chart-grid {
      stroke: rgba(30, 41, 59, 0.1);
    }

    .chart-axis {
      stroke: rgba(30, 41, 59, 0.35);
      stroke-dasharray: 4 6;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      margin-top: 10px;
      font-size: 12px;
      color: var(--muted);
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 5px;
      background: var(--swatch);
    }

    .empty-note {
      color: var(--muted);
      text-align: center;
      padding: 30px 0;
    }

    .status {
      font-size: 0.9rem;
      color: var(--danger);
      min-height: 1.2em;
    }

    @media (max-width: 860px) {
      .layout {
        grid-template-columns: 1fr;
      }
      .sidebar {
        flex-direction: row;
        flex-wrap: wrap;
        align-items: center;
      }
    }
  </style>
</head>
<body>
  <div class="layout">
    <aside class="sidebar">
      <div class="brand">
        <h2>AI Traffic Insights</h2>
        <p>Data-driven view of AI tool demand</p>
      </div>
      <div>
        <div class="nav-section-title">Core pages</div>
        <nav id="nav"></nav>
      </div>
      <div id="more-tracks" hidden>
        <div class="nav-section-title">More tracks</div>
        <select id="more-tracks-select" class="track-select"></select>
      </div>
      <div>
        <div class="nav-section-title">Data</div>
        <div class="info-card">
          <span>Updated through</span>
          <strong>{{UPDATED_THROUGH}}</strong>
        </div>
        <div class="info-card">
          <span>Tools tracked</span>
          <strong>{{TOOL_COUNT}}</strong>
        </div>
      </div>
    </aside>

    <main class="content">
      <h1 class="page-title" id="page-title">AI Tool Traffic Overview</h1>
      <div class="status" id="status"></div>
      <div id="page"></div>
    </main>
  </div>

  <script>
    const PRIMARY_TRACKS = 5;
    const SERIES_COLORS = ['#6366f1', '#8b5cf6', '#06b6d4', '#10b981', '#f59e0b'];

    const navEl = document.getElementById('nav');
    const moreWrapEl = document.getElementById('more-tracks');
    const moreSelectEl = document.getElementById('more-tracks-select');
    const pageEl = document.getElementById('page');
    const titleEl = document.getElementById('page-title');
    const statusEl = document.getElementById('status');

    let overviewData = null;
    const trackCache = new Map();
    // The selected view is plain client state; the server keeps none.
    let currentPage = 'overview';

    const setStatus = (message) => {
      statusEl.textContent = message || '';
    };

    const formatVisits = (num) => {
      if (typeof num !== 'number' || Number.isNaN(num) || num === 0) {
        return '0';
      }
      const negative = num < 0;
      const abs = Math.abs(num);
      let formatted;
      if (abs >= 1e9) {
        formatted = (abs / 1e9).toFixed(1) + 'B';
      } else if (abs >= 1e6) {
        formatted = (abs / 1e6).toFixed(1) + 'M';
      } else if (abs >= 1e3) {
        formatted = Math.round(abs / 1e3) + 'K';
      } else {
        formatted = Math.round(abs).toString();
      }
      return negative ? '-' + formatted : formatted;
    };

    const formatPct = (value) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '0.0%';
      }
      return value.toFixed(1) + '%';
    };

    const pctClass = (value) => ((value || 0) < 0 ? 'pct-down' : 'pct-up');

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const metricCards = (cards) =>
      '<section class="cards">' +
      cards
        .map(
          (card) =>
            '<div class="metric-card"><div class="metric-value">' +
            escapeHtml(card.value) +
            '</div><div class="metric-label">' +
            escapeHtml(card.label) +
            '</div></div>'
        )
        .join('') +
      '</section>';

    const svgChart = (id) =>
      '<svg id="' + id + '" class="chart" viewBox="0 0 640 300" role="img"></svg>';

    const chartFrame = (values, width, height) => {
      const paddingX = 52;
      const paddingY = 36;
      const top = 20;
      let min = Math.min(...values, 0);
      let max = Math.max(...values, 0);
      if (min === max) {
        min -= 1;
        max += 1;
      }
      const range = max - min;
      const scaleY = (height - top - paddingY) / range;
      return {
        paddingX,
        paddingY,
        top,
        min,
        max,
        range,
        x: (index, count) =>
          count > 1
            ? paddingX + (index * (width - paddingX * 2)) / (count - 1)
            : width / 2,
        y: (value) => height - paddingY - (value - min) * scaleY
      };
    };

    const gridLines = (frame, width, height, formatter) => {
      const ticks = 4;
      let markup = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = frame.min + (frame.range * i) / ticks;
        const yPos = frame.y(value);
        markup +=
          '<line class="chart-grid" x1="' + frame.paddingX + '" y1="' + yPos +
          '" x2="' + (width - frame.paddingX) + '" y2="' + yPos + '" />';
        markup +=
          '<text class="chart-label" x="' + (frame.paddingX - 8) + '" y="' + (yPos + 4) +
          '" text-anchor="end">' + formatter(value) + '</text>';
      }
      markup +=
        '<line class="chart-axis" x1="' + frame.paddingX + '" y1="' + frame.y(0) +
        '" x2="' + (width - frame.paddingX) + '" y2="' + frame.y(0) + '" />';
      return markup;
    };

    const renderLineChart = (el, labels, seriesList) => {
      const width = 640;
      const height = 300;
      const values = seriesList.flatMap((series) => series.values);
      if (!values.length) {
        el.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      const frame = chartFrame(values, width, height);
      let markup = gridLines(frame, width, height, formatVisits);

      labels.forEach((label, index) => {
        markup +=
          '<text class="chart-label" x="' + frame.x(index, labels.length) +
          '" y="' + (height - frame.paddingY + 18) + '" text-anchor="middle">' +
          escapeHtml(label) + '</text>';
      });

      seriesList.forEach((series, seriesIndex) => {
        const color = SERIES_COLORS[seriesIndex % SERIES_COLORS.length];
        const path = series.values
          .map(
            (value, index) =>
              (index === 0 ? 'M ' : 'L ') +
              frame.x(index, series.values.length).toFixed(2) + ' ' +
              frame.y(value).toFixed(2)
          )
          .join(' ');
        markup += '<path fill="none" stroke="' + color + '" stroke-width="3" d="' + path + '" />';
        markup += series.values
          .map(
            (value, index) =>
              '<circle cx="' + frame.x(index, series.values.length) + '" cy="' + frame.y(value) +
              '" r="4" fill="white" stroke="' + color + '" stroke-width="2" />'
          )
          .join('');
      });

      el.innerHTML = markup;
    };

    const renderBarChart = (el, labels, values, colorFor, formatter) => {
      const width = 640;
      const height = 300;
      if (!values.length) {
        el.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      const frame = chartFrame(values, width, height);
      let markup = gridLines(frame, width, height, formatter);

      const span = width - frame.paddingX * 2;
      const slot = span / values.length;
      const barWidth = Math.min(46, slot * 0.6);

      values.forEach((value, index) => {
        const xMid = frame.paddingX + slot * index + slot / 2;
        const yZero = frame.y(0);
        const yValue = frame.y(value);
        const barTop = Math.min(yZero, yValue);
        const barHeight = Math.max(Math.abs(yZero - yValue), 1);
        markup +=
          '<rect x="' + (xMid - barWidth / 2) + '" y="' + barTop + '" width="' + barWidth +
          '" height="' + barHeight + '" rx="4" fill="' + colorFor(value) + '" />';
        markup +=
          '<text class="chart-label" x="' + xMid + '" y="' + (barTop - 6) +
          '" text-anchor="middle">' + formatter(value) + '</text>';
        markup +=
          '<text class="chart-label" x="' + xMid + '" y="' + (height - frame.paddingY + 18) +
          '" text-anchor="middle">' + escapeHtml(labels[index]) + '</text>';
      });

      el.innerHTML = markup;
    };

    const renderHistogram = (el, bins) => {
      const total = bins.reduce((acc, bin) => acc + bin.count, 0);
      if (!total) {
        el.innerHTML =
          '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }
      const width = 640;
      const height = 300;
      const frame = chartFrame(bins.map((bin) => bin.count), width, height);
      let markup = gridLines(frame, width, height, (value) => Math.round(value));

      const span = width - frame.paddingX * 2;
      const slot = span / bins.length;
      bins.forEach((bin, index) => {
        const x = frame.paddingX + slot * index;
        const yTop = frame.y(bin.count);
        const barHeight = frame.y(0) - yTop;
        markup +=
          '<rect x="' + (x + 1) + '" y="' + yTop + '" width="' + (slot - 2) +
          '" height="' + Math.max(barHeight, 0) + '" fill="rgba(99, 102, 241, 0.8)" />';
        if (index % 5 === 0) {
          markup +=
            '<text class="chart-label" x="' + x + '" y="' + (height - frame.paddingY + 18) +
            '" text-anchor="middle">' + bin.lo + '%</text>';
        }
      });

      el.innerHTML = markup;
    };

    // Diverging red-yellow-green scale centered on zero, clamped at +/-50%.
    const momColor = (value) => {
      const clamped = Math.max(-50, Math.min(50, value || 0));
      const hue = 60 + (clamped / 50) * 60;
      return 'hsl(' + hue + ', 72%, 62%)';
    };

    const renderHeatmap = (el, heatmap) => {
      const columns = heatmap.months.length;
      let markup =
        '<div class="heatmap" style="grid-template-columns: minmax(130px, 1.2fr) repeat(' +
        columns + ', 1fr);">';
      markup += '<div></div>';
      heatmap.months.forEach((month) => {
        markup += '<div class="heatmap-head">' + escapeHtml(month) + ' MoM</div>';
      });
      // Rows arrive lowest-traffic first; the busiest track renders on top.
      [...heatmap.rows].reverse().forEach((row) => {
        markup +=
          '<div class="heatmap-label" title="Total visits: ' + formatVisits(row.total_visits) +
          '">' + escapeHtml(row.category) + '</div>';
        row.mom_growth.forEach((value) => {
          markup +=
            '<div class="heatmap-cell" style="background:' + momColor(value) + '">' +
            formatPct(value) + '</div>';
        });
      });
      markup += '</div>';
      el.innerHTML = markup;
    };

    const trackTable = (tracks) => {
      let markup =
        '<table><thead><tr><th>Track</th><th>Tools</th><th>Jun visits</th>' +
        '<th>Half-year delta</th><th>Avg growth</th></tr></thead><tbody>';
      tracks.forEach((track) => {
        markup +=
          '<tr><td>' + escapeHtml(track.category) + '</td>' +
          '<td>' + track.tool_count + '</td>' +
          '<td>' + formatVisits(track.latest_month_total) + '</td>' +
          '<td>' + formatVisits(track.half_year_delta_total) + '</td>' +
          '<td class="' + pctClass(track.avg_growth) + '">' + formatPct(track.avg_growth) +
          '</td></tr>';
      });
      return markup + '</tbody></table>';
    };

    const topToolsTable = (tools) => {
      let markup =
        '<table><thead><tr><th>#</th><th>Tool</th><th>Jun visits</th>' +
        '<th>Half-year delta</th><th>Growth</th></tr></thead><tbody>';
      tools.forEach((tool, index) => {
        markup +=
          '<tr><td>' + (index + 1) + '</td>' +
          '<td>' + escapeHtml(tool.name) + '</td>' +
          '<td>' + formatVisits(tool.latest_month) + '</td>' +
          '<td>' + formatVisits(tool.half_year_delta) + '</td>' +
          '<td class="' + pctClass(tool.half_year_growth) + '">' +
          formatPct(tool.half_year_growth) + '</td></tr>';
      });
      return markup + '</tbody></table>';
    };

    const renderOverview = () => {
      const data = overviewData;
      titleEl.textContent = 'AI Tool Traffic Overview';

      if (!data.tool_count) {
        pageEl.innerHTML =
          '<div class="panel"><p class="empty-note">No traffic data loaded. ' +
          'Check the source spreadsheet and restart the server.</p></div>';
        return;
      }

      let markup = metricCards([
        { value: data.tool_count.toLocaleString(), label: 'AI tools' },
        { value: formatVisits(data.latest_month_total), label: 'Jun visits' },
        { value: formatVisits(data.half_year_delta_total), label: 'Half-year delta' },
        { value: formatPct(data.avg_growth), label: 'Avg growth' }
      ]);

      markup += '<section class="panel"><h2>Track overview</h2>' + trackTable(data.tracks) + '</section>';
      markup += '<section class="panel"><h2>Monthly MoM growth by track</h2><div id="heatmap"></div></section>';
      markup += '<section class="panel"><h2>Half-year growth distribution</h2>' + svgChart('histogram') + '</section>';
      pageEl.innerHTML = markup;

      renderHeatmap(document.getElementById('heatmap'), data.heatmap);
      renderHistogram(document.getElementById('histogram'), data.growth_histogram);
    };

    const renderTrack = (data) => {
      titleEl.textContent = data.category;

      let markup = metricCards([
        { value: data.tool_count.toLocaleString(), label: 'Tools' },
        { value: formatVisits(data.monthly_totals[data.monthly_totals.length - 1]), label: 'Jun visits' },
        { value: formatVisits(data.half_year_delta_total), label: 'Half-year delta' },
        { value: formatPct(data.avg_growth), label: 'Avg growth' }
      ]);

      markup += '<section class="panel"><h2>Top 10 tools</h2>' + topToolsTable(data.top_tools) + '</section>';
      markup += '<section class="panel"><h2>Monthly visits, top 5 tools</h2>' + svgChart('trend') +
        '<div class="legend" id="trend-legend"></div></section>';
      markup += '<section class="panel"><h2>MoM growth of track totals</h2>' + svgChart('mom') + '</section>';
      markup += '<section class="panel"><h2>Growth distribution</h2>' + svgChart('track-histogram') + '</section>';
      pageEl.innerHTML = markup;

      const shortMonths = data.months.map((month) => month.split(' ')[0]);
      renderLineChart(
        document.getElementById('trend'),
        shortMonths,
        data.trend.map((series) => ({ name: series.name, values: series.visits }))
      );
      document.getElementById('trend-legend').innerHTML = data.trend
        .map(
          (series, index) =>
            '<span style="--swatch:' + SERIES_COLORS[index % SERIES_COLORS.length] + '">' +
            escapeHtml(series.name) + '</span>'
        )
        .join('');

      renderBarChart(
        document.getElementById('mom'),
        shortMonths.slice(1),
        data.mom_growth,
        (value) => (value < 0 ? '#ef4444' : value < 20 ? '#10b981' : '#f59e0b'),
        formatPct
      );
      renderHistogram(document.getElementById('track-histogram'), data.growth_histogram);
    };

    const loadTrack = async (name) => {
      if (trackCache.has(name)) {
        return trackCache.get(name);
      }
      const res = await fetch('/api/tracks/' + encodeURIComponent(name));
      if (!res.ok) {
        throw new Error('Unable to load track ' + name);
      }
      const data = await res.json();
      trackCache.set(name, data);
      return data;
    };

    const renderActivePage = async () => {
      setStatus('');
      if (currentPage === 'overview') {
        renderOverview();
        return;
      }
      try {
        renderTrack(await loadTrack(currentPage));
      } catch (err) {
        setStatus(err.message);
      }
    };

    const setActivePage = (page) => {
      currentPage = page;
      Array.from(navEl.querySelectorAll('.nav-button')).forEach((button) => {
        button.classList.toggle('active', button.dataset.page === page);
      });
      const primary = overviewData.tracks
        .slice(0, PRIMARY_TRACKS)
        .some((track) => track.category === page);
      moreSelectEl.value = primary || page === 'overview' ? '' : page;
      renderActivePage();
    };

    const buildNav = () => {
      const entries = [{ page: 'overview', label: 'Overview' }].concat(
        overviewData.tracks
          .slice(0, PRIMARY_TRACKS)
          .map((track) => ({ page: track.category, label: track.category }))
      );
      navEl.innerHTML = entries
        .map(
          (entry) =>
            '<button class="nav-button" data-page="' + escapeHtml(entry.page) + '">' +
            escapeHtml(entry.label) + '</button>'
        )
        .join('');
      Array.from(navEl.querySelectorAll('.nav-button')).forEach((button) => {
        button.addEventListener('click', () => setActivePage(button.dataset.page));
      });

      const rest = overviewData.tracks.slice(PRIMARY_TRACKS);
      if (rest.length) {
        moreWrapEl.hidden = false;
        moreSelectEl.innerHTML =
          '<option value="">Select a track...</option>' +
          rest
            .map(
              (track) =>
                '<option value="' + escapeHtml(track.category) + '">' +
                escapeHtml(track.category) + '</option>'
            )
            .join('');
        moreSelectEl.addEventListener('change', () => {
          if (moreSelectEl.value) {
            setActivePage(moreSelectEl.value);
          }
        });
      }
    };

    const boot = async () => {
      const res = await fetch('/api/overview');
      if (!res.ok) {
        throw new Error('Unable to load overview data');
      }
      overviewData = await res.json();
      buildNav();
      setActivePage(currentPage);
    };

    boot().catch((err) => setStatus(err.message));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1418), "1,418");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn render_index_substitutes_placeholders() {
        let page = render_index(1418, "Jun 2025");
        assert!(page.contains("1,418"));
        assert!(page.contains("Jun 2025"));
        assert!(!page.contains("{{TOOL_COUNT}}"));
        assert!(!page.contains("{{UPDATED_THROUGH}}"));
    }
}
