//! Static parts of the HTML report

pub const STYLE: &str = r#"<style>
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; margin: 0; display: flex; height: 100vh; }
#sidebar { width: 300px; background: #f5f5f7; border-right: 1px solid #ddd; padding: 20px; box-shadow: 2px 0 5px rgba(0,0,0,0.05); overflow-y: auto; }
#main { flex: 1; padding: 40px; overflow-y: auto; background: #fff; }
.node { margin-left: 20px; }
.folder { cursor: pointer; user-select: none; display: flex; align-items: center; padding: 4px 0; }
.folder:hover { color: #0066cc; }
.folder::before { content: '\1F4C1'; margin-right: 8px; font-size: 1.2em; }
.file { margin-left: 24px; padding: 2px 0; color: #555; display: flex; justify-content: space-between; font-size: 0.9em; }
.file::before { content: '\1F4C4'; margin-right: 8px; }
.hidden { display: none; }
.size { color: #999; font-size: 0.85em; margin-left: 10px; }
h1 { margin-top: 0; color: #333; }
.meta { color: #888; font-size: 0.85em; margin-bottom: 24px; word-break: break-all; }
.stat-card { background: white; padding: 15px; border-radius: 8px; margin-bottom: 15px; box-shadow: 0 2px 4px rgba(0,0,0,0.05); }
.bar-row { display: flex; align-items: center; margin-bottom: 4px; font-size: 0.85em; }
.bar-label { width: 60px; overflow: hidden; text-overflow: ellipsis; }
.bar { height: 8px; background: #0066cc; border-radius: 4px; }
.bar-count { margin-left: 8px; }
.empty { color: #999; font-style: italic; }
</style>
"#;

pub const BODY: &str = r#"<body>
<div id="sidebar">
  <div class="stat-card">
    <h3>Summary</h3>
    <div id="stats">Loading...</div>
  </div>
  <div class="stat-card">
    <h3>File Types</h3>
    <div id="type-chart"></div>
  </div>
</div>
<div id="main">
  <h1 id="title"></h1>
  <div class="meta" id="meta"></div>
  <div id="tree"></div>
</div>
"#;

/// Client-side rendering. Expects `DATA`, `STATS` and `META` to be defined.
pub const SCRIPT: &str = r#"<script>
const SIZE_UNITS = ['B', 'KB', 'MB', 'GB'];

function formatSize(bytes) {
  if (bytes === 0) return '0 B';
  let unit = 0;
  while (unit + 1 < SIZE_UNITS.length && bytes >= Math.pow(1024, unit + 1)) unit++;
  const scaled = bytes / Math.pow(1024, unit);
  return (Math.round(scaled * 100) / 100) + ' ' + SIZE_UNITS[unit];
}

function el(tag, className, text) {
  const node = document.createElement(tag);
  if (className) node.className = className;
  if (text !== undefined) node.textContent = text;
  return node;
}

function dirsFirst(a, b) {
  if (a.type === b.type) return 0;
  return a.type === 'dir' ? -1 : 1;
}

function buildTree(node, container, depth) {
  const wrapper = el('div', 'node');

  if (node.type === 'dir') {
    const title = el('div', 'folder', node.name);
    const children = el('div');
    if (depth > META.collapseDepth) children.classList.add('hidden');
    title.addEventListener('click', () => children.classList.toggle('hidden'));

    wrapper.appendChild(title);
    wrapper.appendChild(children);
    node.children.slice().sort(dirsFirst).forEach(child => buildTree(child, children, depth + 1));
  } else {
    const file = el('div', 'file');
    file.appendChild(el('span', null, node.name));
    file.appendChild(el('span', 'size', formatSize(node.size)));
    wrapper.appendChild(file);
  }

  container.appendChild(wrapper);
}

function renderStats(stats) {
  const panel = document.getElementById('stats');
  panel.textContent = '';
  panel.appendChild(el('div', null, 'Files: ' + stats.files));
  panel.appendChild(el('div', null, 'Directories: ' + stats.directories));
  panel.appendChild(el('div', null, 'Size: ' + stats.totalSize));
}

function renderChart(extensions) {
  const chart = document.getElementById('type-chart');
  chart.textContent = '';
  if (extensions.length === 0) {
    chart.appendChild(el('div', 'empty', 'No files'));
    return;
  }
  extensions.forEach(({ ext, count, width }) => {
    const row = el('div', 'bar-row');
    row.appendChild(el('span', 'bar-label', ext));
    const bar = el('div', 'bar');
    bar.style.width = width + 'px';
    row.appendChild(bar);
    row.appendChild(el('span', 'bar-count', String(count)));
    chart.appendChild(row);
  });
}

document.getElementById('title').textContent = META.title;
document.getElementById('meta').textContent = META.root + ' · generated ' + META.generatedAt;
renderStats(STATS);
renderChart(STATS.extensions);
buildTree(DATA, document.getElementById('tree'), 0);
</script>
"#;
