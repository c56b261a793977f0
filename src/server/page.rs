pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>VanLavOrder</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    label { display: block; margin: 1rem 0 0.25rem; }
    li { margin: 0.25rem 0; }
    .error { color: #b00020; }
  </style>
</head>
<body>
  <h1>VanLavOrder</h1>
  <p>Upload sales and write-off spreadsheets (columns: date, product, quantity).</p>
  <form id="upload">
    <label for="sales_file">Sales</label>
    <input id="sales_file" name="sales_file" type="file" accept=".xlsx,.xls,.csv" required>
    <label for="writeoffs_file">Write-offs</label>
    <input id="writeoffs_file" name="writeoffs_file" type="file" accept=".xlsx,.xls,.csv" required>
    <p><button type="submit">Build forecast</button></p>
  </form>
  <div id="weather"></div>
  <ul id="forecast"></ul>
  <p id="status"></p>
  <script>
    const form = document.getElementById('upload');
    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      const status = document.getElementById('status');
      const list = document.getElementById('forecast');
      status.className = '';
      status.textContent = 'Analysing...';
      list.innerHTML = '';
      try {
        const resp = await fetch('/api/forecast', { method: 'POST', body: new FormData(form) });
        const data = await resp.json();
        if (!resp.ok) throw new Error(data.message || resp.statusText);
        const w = data.weather;
        document.getElementById('weather').textContent =
          `Tomorrow in ${w.city}: ${w.temperature}°C, ${w.description}, humidity ${w.humidity}%, wind ${w.wind_speed} m/s`;
        for (const item of data.forecast) {
          const li = document.createElement('li');
          li.textContent = `${item.product}: ${item.forecast_amount} ${item.unit} ` +
            `(+${item.reserve_percent}% reserve = ${item.total_amount} ${item.unit}, write-offs ${item.writeoff_rate}%)`;
          list.appendChild(li);
        }
        status.textContent = `Analysed at ${data.analysis_date}`;
      } catch (err) {
        status.className = 'error';
        status.textContent = err.message;
      }
    });
  </script>
</body>
</html>
"#;
